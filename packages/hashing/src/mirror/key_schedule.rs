//! Sliding window of per-layer keys, chained across completed chunks

use super::block::LayerKey;
use super::constants::{FIRST_PRIMES_CUBIC_ROOT, cubic_root_nibbles};
use crate::config::{KeyInit, MirrorConfig};
use rand_mt::Mt;
use std::collections::VecDeque;

/// Seed for [`KeyInit::Random`] schedules
pub const RANDOM_SEED: u32 = 777;

/// Uniform nibble from MT19937: top 5 bits of a word, rejecting values >= 16
fn draw_nibble(mt: &mut Mt) -> u8 {
    loop {
        let candidate = mt.next_u32() >> 27;
        if candidate < 16 {
            return candidate as u8;
        }
    }
}

/// Ordered layer keys, most recent first. Never longer than `depth`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    depth: usize,
    keys: VecDeque<LayerKey>,
}

impl KeySchedule {
    /// Build the initial schedule for a configuration
    #[must_use]
    pub fn initial(config: &MirrorConfig) -> Self {
        match config.init {
            KeyInit::Standard => Self::standard(config.depth, config.nibbles()),
            KeyInit::Random => Self::random(config.depth, config.nibbles()),
        }
    }

    /// Keys seeded from the prime cubic-root table.
    ///
    /// Layer `i` within the table takes the constant's 8 nibbles followed by
    /// `(i + 1) % 16` fill. Layers past the table use `(i + j) % 16` at
    /// position `j`.
    #[must_use]
    pub fn standard(depth: usize, nibbles: usize) -> Self {
        let keys = (0..depth)
            .map(|i| match FIRST_PRIMES_CUBIC_ROOT.get(i) {
                Some(&constant) => {
                    let fill = ((i + 1) % 16) as u8;
                    LayerKey::from_nibbles(
                        cubic_root_nibbles(constant)
                            .into_iter()
                            .chain(std::iter::repeat(fill))
                            .take(nibbles),
                    )
                }
                None => LayerKey::from_nibbles((0..nibbles).map(|j| ((i + j) % 16) as u8)),
            })
            .collect();
        Self { depth, keys }
    }

    /// Keys drawn uniformly from `0..16` by MT19937 keyed with `[RANDOM_SEED]`.
    ///
    /// Layers are filled in order from a single stream, so the schedule is
    /// stable across releases and platforms.
    #[must_use]
    pub fn random(depth: usize, nibbles: usize) -> Self {
        let mut mt = Mt::new_with_key([RANDOM_SEED]);
        let keys = (0..depth)
            .map(|_| LayerKey::from_nibbles((0..nibbles).map(|_| draw_nibble(&mut mt))))
            .collect();
        Self { depth, keys }
    }

    /// Build from explicit keys, most recent first. Extra keys are dropped.
    #[must_use]
    pub fn from_keys(depth: usize, keys: impl IntoIterator<Item = LayerKey>) -> Self {
        Self {
            depth,
            keys: keys.into_iter().take(depth).collect(),
        }
    }

    /// Window capacity
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of keys currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no keys are held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Key for `layer`; index 0 is the most recently pushed
    #[must_use]
    pub fn key(&self, layer: usize) -> Option<&LayerKey> {
        self.keys.get(layer)
    }

    /// Prepend `key`, dropping the oldest once over capacity
    pub fn push(&mut self, key: LayerKey) {
        self.keys.push_front(key);
        self.keys.truncate(self.depth);
    }

    /// Iterate keys, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &LayerKey> {
        self.keys.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_first_layer() {
        let schedule = KeySchedule::standard(2, 64);
        let key = schedule.key(0).unwrap();
        assert_eq!(key.len(), 64);
        assert_eq!(&key.as_nibbles()[..8], &[0xa, 0x5, 0x4, 0xd, 0xd, 0xd, 0x3, 0x5]);
        assert!(key.as_nibbles()[8..].iter().all(|&n| n == 1));
        assert!(schedule.key(1).unwrap().as_nibbles()[8..].iter().all(|&n| n == 2));
    }

    #[test]
    fn test_standard_fill_wraps_mod_16() {
        let schedule = KeySchedule::standard(16, 64);
        // layer 15 fills with (15 + 1) % 16
        assert!(schedule.key(15).unwrap().as_nibbles()[8..].iter().all(|&n| n == 0));
    }

    #[test]
    fn test_standard_beyond_table_is_synthesized() {
        let schedule = KeySchedule::standard(70, 64);
        let key = schedule.key(65).unwrap();
        let expected: Vec<u8> = (0..64).map(|j| ((65 + j) % 16) as u8).collect();
        assert_eq!(key.as_nibbles(), expected.as_slice());
    }

    #[test]
    fn test_standard_narrow_keys_truncate_constant() {
        let schedule = KeySchedule::standard(1, 2);
        assert_eq!(schedule.key(0).unwrap().as_nibbles(), &[0xa, 0x5]);
    }

    #[test]
    fn test_random_is_deterministic_and_in_range() {
        let a = KeySchedule::random(8, 64);
        let b = KeySchedule::random(8, 64);
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
        assert!(a.iter().flat_map(LayerKey::as_nibbles).all(|&n| n < 16));
        assert_ne!(a, KeySchedule::standard(8, 64));
    }

    #[test]
    fn test_random_stream_is_pinned() {
        let schedule = KeySchedule::random(2, 64);
        assert_eq!(
            &schedule.key(0).unwrap().as_nibbles()[..8],
            &[7, 14, 14, 11, 8, 10, 1, 14]
        );
        assert_eq!(&schedule.key(1).unwrap().as_nibbles()[..4], &[12, 14, 10, 11]);
    }

    #[test]
    fn test_push_slides_window() {
        let mut schedule = KeySchedule::standard(3, 4);
        let oldest_kept = schedule.key(1).cloned();
        let fresh = LayerKey::from_nibbles([9, 9, 9, 9]);
        schedule.push(fresh.clone());
        assert_eq!(schedule.len(), 3);
        assert_eq!(schedule.key(0), Some(&fresh));
        assert_eq!(schedule.key(2), oldest_kept.as_ref());
    }
}
