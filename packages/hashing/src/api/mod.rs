//! Fluent hashing API
//!
//! Usage: `Hash::mirror256().with_depth(64).compute("message")`

pub mod hash_entry;
pub mod mirror256_builder;

// Re-export main entry point
pub use hash_entry::Hash;

pub use mirror256_builder::Mirror256Builder;
