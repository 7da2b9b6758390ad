//! Entry point for the fluent hashing API

use super::mirror256_builder::Mirror256Builder;

/// Entry point for hash operations
pub struct Hash;

impl Hash {
    /// Use Mirror256 with the reference parameters
    #[must_use]
    pub fn mirror256() -> Mirror256Builder {
        Mirror256Builder::new()
    }
}
