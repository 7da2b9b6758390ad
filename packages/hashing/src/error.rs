//! Error handling for the Mirror256 engine

use thiserror::Error;

/// Hashing-specific errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// Message input was not text. Raised before any state is touched.
    #[error("{context} argument must be {expected}, not {found}")]
    InvalidInputType {
        /// Operation that rejected the input
        context: &'static str,
        /// What the operation accepts
        expected: &'static str,
        /// Description of what was received
        found: String,
    },

    /// Construction parameters outside what the gate network can address
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// Configuration document could not be parsed
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl HashError {
    /// Create an `InvalidInputType` error for byte input that is not UTF-8
    #[must_use]
    pub fn not_text(context: &'static str, err: &std::str::Utf8Error) -> Self {
        Self::InvalidInputType {
            context,
            expected: "string",
            found: format!("bytes (invalid UTF-8 at offset {})", err.valid_up_to()),
        }
    }

    /// Create an `invalid_parameters` error
    #[must_use]
    pub fn invalid_parameters(msg: impl Into<String>) -> Self {
        Self::InvalidParameters(msg.into())
    }
}

impl From<serde_json::Error> for HashError {
    fn from(err: serde_json::Error) -> Self {
        Self::Configuration(err.to_string())
    }
}

/// Result type for hashing operations
pub type Result<T> = std::result::Result<T, HashError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_text_reports_offset() {
        let bytes = vec![b'o', b'k', 0xff, 0xfe];
        let err = std::str::from_utf8(&bytes).unwrap_err();
        let e = HashError::not_text("update()", &err);
        assert_eq!(
            e.to_string(),
            "update() argument must be string, not bytes (invalid UTF-8 at offset 2)"
        );
    }

    #[test]
    fn test_invalid_parameters_display() {
        let e = HashError::invalid_parameters("depth must be at least 1");
        assert_eq!(e.to_string(), "Invalid parameters: depth must be at least 1");
    }
}
