//! Error types for the identifier codecs

use thiserror::Error;

/// Codec error types
#[derive(Debug, Error)]
pub enum UuidError {
    /// String does not match the canonical hyphenated UUID grouping
    #[error("malformed UUID string: {0:?}")]
    MalformedUuid(String),

    /// Bare hex string has an odd length or non-hex characters
    #[error("invalid hex string: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Version string is not "major.minor" with both parts fitting 16 bits
    #[error("malformed version string: {0:?}")]
    MalformedVersion(String),

    /// Buffer underflow - not enough data
    #[error("buffer underflow: needed {needed} bytes, have {have}")]
    BufferUnderflow { needed: usize, have: usize },
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, UuidError>;
