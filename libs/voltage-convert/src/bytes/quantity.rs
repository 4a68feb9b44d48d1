//! Fixed-width byte quantities and their hex form

use std::str::FromStr;

use crate::error::{ConvertError, Result};

/// Exactly `N` raw bytes, most significant first as written
///
/// Parsing accepts upper or lower case hex; rendering is always lowercase
/// with two digits per byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteQuantity<const N: usize>([u8; N]);

/// Single byte
pub type Byte = ByteQuantity<1>;
/// 16-bit word
pub type Word = ByteQuantity<2>;
/// 32-bit double word
pub type DWord = ByteQuantity<4>;

impl<const N: usize> ByteQuantity<N> {
    /// Number of hex digits in the textual form
    pub const HEX_LEN: usize = N * 2;

    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Parse `2 * N` hex digits
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.chars().count();
        if digits != Self::HEX_LEN {
            return Err(ConvertError::invalid_length(Self::HEX_LEN, digits));
        }
        if !s.is_ascii() {
            return Err(ConvertError::invalid_hex(format!(
                "{:?}: non-ASCII character",
                s
            )));
        }

        let mut bytes = [0u8; N];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| ConvertError::invalid_hex(format!("{:?}: {}", s, e)))?;
        Ok(Self(bytes))
    }

    /// Lowercase hex, two digits per byte
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; N] {
        self.0
    }
}

impl<const N: usize> From<[u8; N]> for ByteQuantity<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> TryFrom<&[u8]> for ByteQuantity<N> {
    type Error = ConvertError;

    fn try_from(slice: &[u8]) -> Result<Self> {
        let bytes: [u8; N] = slice
            .try_into()
            .map_err(|_| ConvertError::invalid_length(Self::HEX_LEN, slice.len() * 2))?;
        Ok(Self(bytes))
    }
}

impl<const N: usize> FromStr for ByteQuantity<N> {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl<const N: usize> std::fmt::Display for ByteQuantity<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
