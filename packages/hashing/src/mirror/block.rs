//! Nibble-array working state addressed as individual wires

use std::ops::Index;

/// Fixed-length sequence of 4-bit values.
///
/// Wire `w` lives in nibble `w / 4` at bit position `w % 4`. Every element
/// stays in `0..=15`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Block(Vec<u8>);

/// A block-shaped key parameterizing one layer
pub type LayerKey = Block;

impl Block {
    /// Block of `len` zero nibbles
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0; len])
    }

    /// Build from raw values, keeping only the low 4 bits of each
    #[must_use]
    pub fn from_nibbles(nibbles: impl IntoIterator<Item = u8>) -> Self {
        Self(nibbles.into_iter().map(|n| n & 0x0f).collect())
    }

    /// Number of nibbles
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the block holds no nibbles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the nibbles
    #[must_use]
    pub fn as_nibbles(&self) -> &[u8] {
        &self.0
    }

    /// Keep at most the first `len` nibbles
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// Bit value at `wire`. Wires past the end read as zero.
    #[inline]
    #[must_use]
    pub fn bit(&self, wire: usize) -> bool {
        self.0
            .get(wire / 4)
            .is_some_and(|nibble| (nibble >> (wire % 4)) & 1 == 1)
    }

    /// Overwrite the bit at `wire`. Writes past the end are dropped.
    #[inline]
    pub fn set_bit(&mut self, wire: usize, value: bool) {
        if let Some(nibble) = self.0.get_mut(wire / 4) {
            let mask = 1u8 << (wire % 4);
            if value {
                *nibble |= mask;
            } else {
                *nibble &= !mask;
            }
        }
    }

    /// XOR `key` into this block position by position over the shorter length
    pub fn xor_with(&mut self, key: &LayerKey) {
        for (nibble, k) in self.0.iter_mut().zip(key.0.iter()) {
            *nibble ^= k;
        }
    }
}

impl Index<usize> for Block {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl From<Block> for Vec<u8> {
    fn from(block: Block) -> Self {
        block.0
    }
}
