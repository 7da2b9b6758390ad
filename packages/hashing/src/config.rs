//! Hasher configuration with the reference defaults

use crate::{HashError, Result};
use serde::{Deserialize, Serialize};

/// Default number of gate layers per chunk
pub const DEFAULT_DEPTH: usize = 128;

/// Default digest size in bits
pub const DEFAULT_SIZE: usize = 256;

/// How the initial key schedule is generated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyInit {
    /// Keys derived from truncated cubic roots of the first primes
    #[default]
    Standard,
    /// Keys drawn from a generator reseeded with a fixed seed
    Random,
}

/// Parameters shared by every hasher built from the same configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Number of layers applied to every chunk
    #[serde(default = "default_depth")]
    pub depth: usize,
    /// Digest size in bits
    #[serde(default = "default_size")]
    pub size: usize,
    /// Key schedule initialization mode
    #[serde(default)]
    pub init: KeyInit,
}

fn default_depth() -> usize {
    DEFAULT_DEPTH
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            size: DEFAULT_SIZE,
            init: KeyInit::Standard,
        }
    }
}

impl MirrorConfig {
    /// Parse and validate a JSON configuration document.
    ///
    /// Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Configuration` for malformed JSON and
    /// `HashError::InvalidParameters` for out-of-range values.
    pub fn from_json(doc: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(doc)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the gate network can be laid out for these parameters.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParameters` when `depth` is zero or `size`
    /// is not a positive multiple of 8.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 {
            return Err(HashError::invalid_parameters("depth must be at least 1"));
        }
        if self.size == 0 || self.size % 8 != 0 {
            return Err(HashError::invalid_parameters(format!(
                "size must be a positive multiple of 8, got {}",
                self.size
            )));
        }
        Ok(())
    }

    /// Nibbles per block, also the number of gates per sublayer
    #[must_use]
    pub fn nibbles(&self) -> usize {
        self.size / 4
    }

    /// Digest length in bytes
    #[must_use]
    pub fn digest_len(&self) -> usize {
        self.size / 8
    }
}
