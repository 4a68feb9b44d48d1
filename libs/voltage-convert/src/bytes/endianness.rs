//! Byte order representation for fixed-width integer conversion
//!
//! Type-safe enum for the four byte/word orderings found in field devices,
//! replacing the numeric codes used by older configuration files.

use serde::{Deserialize, Serialize};

/// Byte/word order of a 16 or 32-bit quantity
///
/// # Naming Convention
/// Uses ABCD notation where:
/// - A = Most significant byte (MSB)
/// - B = Second byte
/// - C = Third byte
/// - D = Least significant byte (LSB)
///
/// For 32-bit value `0x12345678`:
/// - `BigEndian (ABCD)`: "12345678"
/// - `MidBigEndian (BADC)`: "34127856"
/// - `LittleEndian (DCBA)`: "78563412"
/// - `MidLittleEndian (CDAB)`: "56781234"
///
/// The two `Mid*` variants swap bytes within 16-bit words and only apply to
/// 32-bit values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Endianness {
    /// Big-endian: ABCD (most significant byte first)
    #[default]
    #[serde(alias = "ABCD", alias = "BE")]
    BigEndian,

    /// Mid-big-endian: BADC (bytes swapped inside each word)
    #[serde(alias = "BADC")]
    MidBigEndian,

    /// Little-endian: DCBA (least significant byte first)
    #[serde(alias = "DCBA", alias = "LE")]
    LittleEndian,

    /// Mid-little-endian: CDAB (words swapped, common on Modbus PLCs)
    #[serde(alias = "CDAB")]
    MidLittleEndian,
}

impl Endianness {
    pub const ALL: [Endianness; 4] = [
        Self::BigEndian,
        Self::MidBigEndian,
        Self::LittleEndian,
        Self::MidLittleEndian,
    ];

    /// Parse from the string forms found in point tables
    ///
    /// Case-insensitive, dashes ignored:
    /// - "ABCD", "AB-CD", "BE", "BIG_ENDIAN" → BigEndian
    /// - "BADC", "MID_BIG_ENDIAN" → MidBigEndian
    /// - "DCBA", "LE", "LITTLE_ENDIAN" → LittleEndian
    /// - "CDAB", "MID_LITTLE_ENDIAN" → MidLittleEndian
    /// - "AB" / "BA" → BigEndian / LittleEndian (16-bit notation)
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "ABCD" | "AB" | "BE" | "BIG_ENDIAN" | "BIGENDIAN" => Some(Self::BigEndian),
            "BADC" | "MID_BIG_ENDIAN" | "MIDBIGENDIAN" => Some(Self::MidBigEndian),
            "DCBA" | "BA" | "LE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" => Some(Self::LittleEndian),
            "CDAB" | "MID_LITTLE_ENDIAN" | "MIDLITTLEENDIAN" => Some(Self::MidLittleEndian),
            _ => None,
        }
    }

    /// Map a legacy numeric code (1 = Big, 2 = MidBig, 3 = Little, 4 = MidLittle)
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::BigEndian),
            2 => Some(Self::MidBigEndian),
            3 => Some(Self::LittleEndian),
            4 => Some(Self::MidLittleEndian),
            _ => None,
        }
    }

    /// Legacy numeric code, inverse of [`Endianness::from_code`]
    pub fn code(&self) -> u8 {
        match self {
            Self::BigEndian => 1,
            Self::MidBigEndian => 2,
            Self::LittleEndian => 3,
            Self::MidLittleEndian => 4,
        }
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "ABCD (Big-Endian)",
            Self::MidBigEndian => "BADC (Mid-Big-Endian)",
            Self::LittleEndian => "DCBA (Little-Endian)",
            Self::MidLittleEndian => "CDAB (Mid-Little-Endian)",
        }
    }

    /// Check if this is a word-swapped variant (32-bit only)
    pub fn is_word_swapped(&self) -> bool {
        matches!(self, Self::MidBigEndian | Self::MidLittleEndian)
    }

    /// Check if this order is meaningful for a quantity of `bytes` bytes
    pub fn supports_width(&self, bytes: usize) -> bool {
        match bytes {
            1 | 4 => true,
            2 => !self.is_word_swapped(),
            _ => false,
        }
    }

    /// Reorder four bytes between this order and big-endian.
    ///
    /// Every permutation here is an involution, so the same call serves
    /// decode and encode.
    pub(crate) fn permute4(&self, b: [u8; 4]) -> [u8; 4] {
        match self {
            Self::BigEndian => b,
            Self::MidBigEndian => [b[1], b[0], b[3], b[2]],
            Self::LittleEndian => [b[3], b[2], b[1], b[0]],
            Self::MidLittleEndian => [b[2], b[3], b[0], b[1]],
        }
    }
}

impl std::fmt::Display for Endianness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
