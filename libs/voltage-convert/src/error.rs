//! Conversion Error Types
//!
//! Every codec failure is reported as an explicit error value. Nothing is
//! truncated silently and no sentinel is returned in place of a result.

use thiserror::Error;

use crate::bytes::Endianness;

/// Result type for voltage-convert operations
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Conversion errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// Hex input does not have the digit count the width requires
    #[error("Invalid length: expected {expected} hex digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Integer cannot be represented at the requested width
    #[error("Value out of range: {value} not in [{min}, {max}]")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// Byte order not meaningful at the requested width
    #[error("Unsupported endianness: {endianness} for {width}-bit values")]
    UnsupportedEndianness { endianness: Endianness, width: u32 },

    /// Hex input has the right length but contains non-hex characters
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Codec defaults could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for ConvertError {
    fn from(err: figment::Error) -> Self {
        ConvertError::Config(err.to_string())
    }
}

// Helper methods for creating errors
impl ConvertError {
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        ConvertError::InvalidLength { expected, actual }
    }

    pub fn out_of_range(value: impl Into<i64>, min: impl Into<i64>, max: impl Into<i64>) -> Self {
        ConvertError::OutOfRange {
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }

    pub fn unsupported_endianness(endianness: Endianness, width: u32) -> Self {
        ConvertError::UnsupportedEndianness { endianness, width }
    }

    pub fn invalid_hex(msg: impl Into<String>) -> Self {
        ConvertError::InvalidHex(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        ConvertError::Config(msg.into())
    }
}
