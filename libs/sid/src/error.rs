//! Error types for encoding, decoding, and short-ID generation.

use thiserror::Error;

/// Errors that can occur when encoding, decoding, or generating IDs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SidError {
    /// The input string is empty.
    #[error("input cannot be empty")]
    Empty,

    /// The input is not a 128-bit UUID (wrong digit count or non-hex characters).
    #[error("malformed UUID '{input}': {reason}")]
    MalformedUuid { input: String, reason: String },

    /// A character outside the base62 alphabet was found while decoding.
    #[error("invalid base62 character '{character}' at position {position}")]
    InvalidBase62Character { character: char, position: usize },

    /// A character outside the URL-safe base64 alphabet was found while decoding.
    #[error("invalid base64url character '{character}' at position {position}")]
    InvalidBase64Character { character: char, position: usize },

    /// The decoded base62 value does not fit in 128 bits.
    #[error("base62 value exceeds 128 bits")]
    Overflow,

    /// The temporal segment has the wrong shape.
    #[error("invalid temporal segment: {message}")]
    InvalidTemporalSegment { message: String },

    /// The prefix is rejected by the configured prefix policy.
    #[error("invalid prefix '{prefix}': {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    /// The requested random segment length exceeds the configured maximum.
    #[error("random segment length {length} exceeds maximum of {max}")]
    InvalidLength { length: usize, max: usize },

    /// A typed short ID is missing its required prefix.
    #[error("ID missing prefix: expected '{expected}', got '{actual}'")]
    MissingPrefix { expected: &'static str, actual: String },

    /// The short ID is missing the `:` separator.
    #[error("ID missing ':' separator")]
    MissingSeparator,
}

impl SidError {
    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, SidError::Empty)
    }

    /// Returns true if decoding hit a character outside the expected alphabet.
    pub fn is_alphabet_error(&self) -> bool {
        matches!(
            self,
            SidError::InvalidBase62Character { .. } | SidError::InvalidBase64Character { .. }
        )
    }

    /// Returns true if a prefix or length constraint was violated.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            SidError::InvalidPrefix { .. } | SidError::InvalidLength { .. }
        )
    }

    /// Returns true if this error indicates a prefix mismatch.
    pub fn is_prefix_error(&self) -> bool {
        matches!(
            self,
            SidError::MissingPrefix { .. } | SidError::InvalidPrefix { .. }
        )
    }
}

/// Result type for ID operations.
pub type SidResult<T> = Result<T, SidError>;
