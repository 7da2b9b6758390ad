//! Mirror256: an experimental hash built from reversible logic gates
//!
//! Each 32-byte chunk is unpacked into nibbles and pushed through `depth`
//! layers of Toffoli and Fredkin gates laid out in a zigzag. Gate choice in
//! every layer comes from an evolving key schedule that chains the output of
//! completed chunks forward.
//!
//! ```
//! use mirror_hashing::Mirror256;
//!
//! let mut hasher = Mirror256::new();
//! hasher.update("Hello").update(", ").update("world!");
//! assert_eq!(hasher.hexdigest(), Mirror256::with_message("Hello, world!").hexdigest());
//! ```
//!
//! No formal cryptographic property is claimed.

#![forbid(unsafe_code)]

pub mod api;
pub mod config;
pub mod error;
pub mod hash_result;
pub mod mirror;

// Re-export error types
pub use error::{HashError, Result};

pub use api::{Hash, Mirror256Builder};
pub use config::{KeyInit, MirrorConfig};
pub use hash_result::HashResult;
pub use mirror::{KeySchedule, Mirror256, ScheduleCache, new};
