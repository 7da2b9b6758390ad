//! Byte/nibble conversion and the fixed chunk padding rule

use super::block::Block;

/// Bytes consumed per chunk
pub const CHUNK_BYTES: usize = 32;

/// Nibbles produced by unpacking one chunk
pub const CHUNK_NIBBLES: usize = CHUNK_BYTES * 2;

/// Filler for short chunks. Not length-disambiguated: a message and the same
/// message followed by `A`s up to the chunk boundary pad identically.
pub const PAD_BYTE: u8 = b'A';

/// Truncate to 32 bytes, or right-pad with [`PAD_BYTE`] up to 32 bytes
#[must_use]
pub fn pad_chunk(bytes: &[u8]) -> [u8; CHUNK_BYTES] {
    let mut chunk = [PAD_BYTE; CHUNK_BYTES];
    let take = bytes.len().min(CHUNK_BYTES);
    chunk[..take].copy_from_slice(&bytes[..take]);
    chunk
}

/// Unpack a chunk into 64 nibbles, high nibble of each byte first.
///
/// Input is padded or truncated to exactly one chunk first.
#[must_use]
pub fn unpack(bytes: &[u8]) -> Block {
    let chunk = pad_chunk(bytes);
    Block::from_nibbles(chunk.iter().flat_map(|b| [b >> 4, b & 0x0f]))
}

/// Pack nibbles into `len` bytes: byte `i` is `nibble[2i] << 4 | nibble[2i + 1]`.
///
/// Nibbles past the end of the block read as zero.
#[must_use]
pub fn pack(block: &Block, len: usize) -> Vec<u8> {
    let nibbles = block.as_nibbles();
    (0..len)
        .map(|i| {
            let hi = nibbles.get(2 * i).copied().unwrap_or(0);
            let lo = nibbles.get(2 * i + 1).copied().unwrap_or(0);
            (hi << 4) | lo
        })
        .collect()
}
