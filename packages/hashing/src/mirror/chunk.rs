//! Drives one chunk through every configured layer

use super::block::Block;
use super::codec;
use super::key_schedule::KeySchedule;
use super::layer::apply_layer;
use crate::config::MirrorConfig;

/// Unpack `chunk` and run layers `0..depth` against `schedule`.
///
/// The block never grows past the 64 unpacked nibbles: for sizes wider than a
/// chunk the upper wires read as zero and drop writes. The schedule is
/// read-only here; chaining the result is the caller's job.
#[must_use]
pub fn process_chunk(chunk: &[u8], schedule: &KeySchedule, config: &MirrorConfig) -> Block {
    let mut block = codec::unpack(chunk);
    block.truncate(config.nibbles());

    for layer in 0..config.depth {
        if let Some(key) = schedule.key(layer) {
            apply_layer(&mut block, key, layer, config.size);
        }
    }
    block
}
