//! Mirror256 builder

use crate::config::{KeyInit, MirrorConfig};
use crate::mirror::{Mirror256, ScheduleCache};
use crate::{HashError, HashResult, Result};
use std::sync::Arc;

/// Mirror256 hash builder
#[derive(Clone, Debug, Default)]
pub struct Mirror256Builder {
    config: MirrorConfig,
    cache: Option<Arc<ScheduleCache>>,
}

impl Mirror256Builder {
    /// Create new Mirror256 builder with default depth and size
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of layers per chunk
    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.config.depth = depth;
        self
    }

    /// Digest size in bits
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    /// Seed layers from the fixed-seed generator instead of the prime table
    #[must_use]
    pub fn with_random_state(mut self) -> Self {
        self.config.init = KeyInit::Random;
        self
    }

    /// Replace every parameter at once
    #[must_use]
    pub fn with_config(mut self, config: MirrorConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `cache` instead of the process-wide schedule cache
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<ScheduleCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Create an empty incremental hasher
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` if depth or size is unsupported.
    pub fn build(self) -> Result<Mirror256> {
        self.build_with(None)
    }

    /// Hash `data` in one call. `data` must be UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidInputType` for non-UTF-8 data and
    /// `HashError::InvalidParameters` if depth or size is unsupported.
    pub fn compute<T: AsRef<[u8]>>(self, data: T) -> Result<HashResult> {
        let text = std::str::from_utf8(data.as_ref())
            .map_err(|e| HashError::not_text("compute()", &e))?;
        Ok(self.build_with(Some(text))?.result())
    }

    fn build_with(self, message: Option<&str>) -> Result<Mirror256> {
        match self.cache {
            Some(cache) => Mirror256::with_cache(self.config, &cache, message),
            None => Mirror256::with_config(self.config, message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Hash;

    #[test]
    fn test_compute_matches_hasher() {
        let result = Hash::mirror256().with_depth(8).compute("test data").unwrap();
        let mut hasher = Hash::mirror256().with_depth(8).build().unwrap();
        hasher.update("test data");
        assert_eq!(result, hasher.result());
        assert_eq!(result.len(), 32);
    }

    #[test]
    fn test_compute_custom_size() {
        let result = Hash::mirror256()
            .with_depth(8)
            .with_size(128)
            .compute(b"test data")
            .unwrap();
        assert_eq!(result.len(), 16);
    }

    #[test]
    fn test_compute_rejects_non_text() {
        let err = Hash::mirror256().compute([0xffu8, 0x00]).unwrap_err();
        assert!(matches!(err, HashError::InvalidInputType { .. }));
    }

    #[test]
    fn test_invalid_parameters_surface_on_build() {
        assert!(Hash::mirror256().with_size(12).build().is_err());
        assert!(Hash::mirror256().with_depth(0).compute("x").is_err());
    }

    #[test]
    fn test_private_cache_is_used() {
        let cache = Arc::new(ScheduleCache::new());
        let _ = Hash::mirror256()
            .with_depth(3)
            .with_random_state()
            .with_cache(Arc::clone(&cache))
            .compute("abc")
            .unwrap();
        assert_eq!(cache.len(), 1);
    }
}
