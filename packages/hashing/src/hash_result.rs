//! Digest value with encoding helpers

/// Result of a hash operation with encoding options
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashResult {
    /// Raw digest bytes
    bytes: Vec<u8>,
}

impl HashResult {
    /// Create a new hash result from raw bytes
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Get the raw bytes of the digest
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercase hex without prefix
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Lowercase hex with the `0x` prefix used by `hexdigest`
    #[must_use]
    pub fn to_prefixed_hex(&self) -> String {
        format!("0x{}", self.to_hex())
    }

    /// Get the length of the digest in bytes
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the digest is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for HashResult {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl std::fmt::Display for HashResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_prefixed_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodings() {
        let result = HashResult::new(vec![0x00, 0xab, 0x0f]);
        assert_eq!(result.to_hex(), "00ab0f");
        assert_eq!(result.to_prefixed_hex(), "0x00ab0f");
        assert_eq!(result.to_string(), "0x00ab0f");
        assert_eq!(result.len(), 3);
    }
}
