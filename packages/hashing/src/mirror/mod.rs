//! The Mirror256 gate-network engine
//!
//! Leaves first: [`codec`] and [`block`] hold the nibble representation,
//! [`key_schedule`] and [`cache`] the per-layer keys, [`gate`] and [`layer`]
//! the reversible network, [`chunk`] drives one chunk through every layer and
//! [`hasher`] is the incremental front end.

pub mod block;
pub mod cache;
pub mod chunk;
pub mod codec;
pub mod constants;
pub mod gate;
pub mod hasher;
pub mod key_schedule;
pub mod layer;

pub use block::{Block, LayerKey};
pub use cache::{ScheduleCache, ScheduleKey};
pub use gate::{Gate, GateKind, Sublayer, Symmetry};
pub use hasher::{Mirror256, new};
pub use key_schedule::KeySchedule;
