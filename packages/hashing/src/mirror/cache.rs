//! Lazily computed initial key schedules shared between hashers

use super::key_schedule::KeySchedule;
use crate::config::{KeyInit, MirrorConfig};
use dashmap::DashMap;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::debug;

static GLOBAL: Lazy<Arc<ScheduleCache>> = Lazy::new(|| Arc::new(ScheduleCache::new()));

/// Cache key: every parameter the initial schedule depends on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScheduleKey {
    /// Window length
    pub depth: usize,
    /// Digest size in bits
    pub size: usize,
    /// Initialization mode
    pub init: KeyInit,
}

impl From<&MirrorConfig> for ScheduleKey {
    fn from(config: &MirrorConfig) -> Self {
        Self {
            depth: config.depth,
            size: config.size,
            init: config.init,
        }
    }
}

/// Memoized initial schedules.
///
/// Entries are handed out as `Arc`s and never mutated; hashers chain onto
/// their own copy.
#[derive(Debug, Default)]
pub struct ScheduleCache {
    entries: DashMap<ScheduleKey, Arc<KeySchedule>>,
}

impl ScheduleCache {
    /// Empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache used when a hasher is not given one
    #[must_use]
    pub fn global() -> Arc<Self> {
        Arc::clone(&*GLOBAL)
    }

    /// Initial schedule for `config`, computing it on first request
    #[must_use]
    pub fn get_or_init(&self, config: &MirrorConfig) -> Arc<KeySchedule> {
        let key = ScheduleKey::from(config);
        let entry = self.entries.entry(key).or_insert_with(|| {
            debug!(
                depth = key.depth,
                size = key.size,
                init = ?key.init,
                "computing initial key schedule"
            );
            Arc::new(KeySchedule::initial(config))
        });
        Arc::clone(entry.value())
    }

    /// Number of cached schedules
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been cached yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached schedule. Hashers already holding one keep it.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_shared() {
        let cache = ScheduleCache::new();
        let config = MirrorConfig {
            depth: 4,
            ..MirrorConfig::default()
        };
        let a = cache.get_or_init(&config);
        let b = cache.get_or_init(&config);
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keyed_by_depth_size_and_mode() {
        let cache = ScheduleCache::new();
        let base = MirrorConfig {
            depth: 4,
            ..MirrorConfig::default()
        };
        let deeper = MirrorConfig { depth: 5, ..base };
        let random = MirrorConfig {
            init: KeyInit::Random,
            ..base
        };
        let narrow = MirrorConfig { size: 128, ..base };

        assert_eq!(cache.get_or_init(&deeper).len(), 5);
        assert_eq!(cache.get_or_init(&narrow).key(0).unwrap().len(), 32);
        assert_ne!(cache.get_or_init(&base), cache.get_or_init(&random));
        assert_eq!(cache.len(), 4);

        cache.clear();
        assert!(cache.is_empty());
    }
}
