//! Round constants for the standard key schedule

/// Truncated cubic roots of the first 64 primes, 40 bits each.
///
/// Only hex digits 1 through 8 (counted from the most significant end of the
/// 10-digit form) seed a layer key; see [`cubic_root_nibbles`].
#[rustfmt::skip]
pub const FIRST_PRIMES_CUBIC_ROOT: [u64; 64] = [
    0xa54ddd35b5, 0xd48ef058b4, 0x342640f4c9, 0x51cd2de3e9, 0x8503094982, 0x9b9fd7c452, 0xc47a643e0c, 0xa8602fe35a,
    0x20eaf18d67, 0x4d59f727fe, 0x685bd4533f, 0x7534dcd163, 0x8dc0dcbb8b, 0xb01624cb6d, 0xcfeabbf181, 0xda0b94f97e,
    0x8f4d86d1a9, 0x20c96455af, 0x29c172f7dd, 0x43b770ba12, 0x544d18005f, 0x6c34f761a1, 0x8a76ef782f, 0x98f8d17ddc,
    0xa0151027c6, 0xae080d4b7b, 0xb4e03c992b, 0xc251542f88, 0x3dc28be52f, 0xb75c7e128f, 0x241edeb8f4, 0x04317d07b2,
    0x46305e3a3d, 0x4bafebecef, 0x09308a3b6b, 0x6bb275e451, 0x76044f4b33, 0x85311d5237, 0x94051aaeb0, 0x98e38ef4df,
    0xb0b5da348c, 0xb55fd044a0, 0xbe9b372069, 0xc32ceea80e, 0xddf799a193, 0x0eee44484b, 0x17529bf549, 0x1b7b53489d,
    0x23ba4d74a0, 0x2febef5a50, 0x33f0db9016, 0x47b5d89777, 0x5352304156, 0x5ec09f1622, 0x6a02e0a83b, 0x0af9027c88,
    0x78c3f873a6, 0x8009496a17, 0x83a5537ad2, 0x95715f4210, 0xadb0de7719, 0xb47bab87d1, 0xb7db7bc375, 0xbe90221e69,
];

/// Number of nibbles a cubic-root constant contributes to its layer key
pub const CUBIC_ROOT_NIBBLES: usize = 8;

/// Split a constant into the 8 nibbles that seed a layer key.
///
/// The constant is viewed as 10 hex digits; the two lowest digits are
/// dropped and the remaining eight are returned most significant first.
#[must_use]
pub fn cubic_root_nibbles(constant: u64) -> [u8; CUBIC_ROOT_NIBBLES] {
    let mut out = [0u8; CUBIC_ROOT_NIBBLES];
    // digits 9..2 of the 40-bit value, i.e. bits 39..8
    let kept = (constant >> 8) & 0xffff_ffff;
    for (i, nibble) in out.iter_mut().enumerate() {
        let shift = 4 * (CUBIC_ROOT_NIBBLES - 1 - i);
        *nibble = ((kept >> shift) & 0xf) as u8;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_root_nibbles_drops_low_digits() {
        assert_eq!(
            cubic_root_nibbles(0xa54ddd35b5),
            [0xa, 0x5, 0x4, 0xd, 0xd, 0xd, 0x3, 0x5]
        );
    }

    #[test]
    fn test_cubic_root_nibbles_keeps_leading_zero() {
        // 0x04317d07b2 has a leading zero digit in its 10-digit form
        assert_eq!(
            cubic_root_nibbles(0x04317d07b2),
            [0x0, 0x4, 0x3, 0x1, 0x7, 0xd, 0x0, 0x7]
        );
    }
}
