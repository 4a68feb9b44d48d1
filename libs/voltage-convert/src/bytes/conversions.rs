//! Integer conversions with byte order support
//!
//! Provides functions for converting between:
//! - Hex strings ↔ integers (8/16/32-bit)
//! - `Byte`/`Word`/`DWord` quantities ↔ integers
//!
//! Decoded values are widened (`i16`, `i32`, `i64`) so both the signed and
//! the unsigned range of each width fit the same return type. Encoders accept
//! any value in `[signed min, unsigned max]` and reject the rest.

use tracing::{debug, trace};

use super::{Byte, DWord, Endianness, Signedness, Word};
use crate::error::{ConvertError, Result};

pub const INT8_MIN: i16 = -0x80;
pub const INT8_MAX: i16 = 0xFF;
pub const INT16_MIN: i32 = -0x8000;
pub const INT16_MAX: i32 = 0xFFFF;
pub const INT32_MIN: i64 = -0x8000_0000;
pub const INT32_MAX: i64 = 0xFFFF_FFFF;

fn check_range(value: i64, min: i64, max: i64, width: u32) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        debug!(value, min, max, width, "Rejected out-of-range value");
        Err(ConvertError::out_of_range(value, min, max))
    }
}

fn check_word_order(endianness: Endianness) -> Result<()> {
    if endianness.supports_width(2) {
        Ok(())
    } else {
        debug!(%endianness, "Rejected word-swapped order for 16-bit value");
        Err(ConvertError::unsupported_endianness(endianness, 16))
    }
}

// ============================================================================
// 8-bit
// ============================================================================

impl Byte {
    /// Interpret the byte, applying two's complement when signed
    pub fn to_int8(&self, signedness: Signedness) -> i16 {
        let value = i16::from(self.as_bytes()[0]);
        if signedness.is_signed() && value & 0x80 != 0 {
            -((value ^ 0xFF) + 1)
        } else {
            value
        }
    }

    /// Build from a value in [-128, 255]
    pub fn from_int8(value: i16) -> Result<Self> {
        check_range(value.into(), INT8_MIN.into(), INT8_MAX.into(), 8)?;
        Ok(Self::new([(value & 0xFF) as u8]))
    }
}

// ============================================================================
// 16-bit
// ============================================================================

impl Word {
    /// Combine MSB and LSB according to `endianness`
    ///
    /// Only `BigEndian` and `LittleEndian` are meaningful for a single word.
    pub fn to_int16(&self, endianness: Endianness, signedness: Signedness) -> Result<i32> {
        check_word_order(endianness)?;

        let [b0, b1] = *self.as_bytes();
        let (msb, lsb) = match endianness {
            Endianness::LittleEndian => (b1, b0),
            _ => (b0, b1),
        };

        let value = i32::from(msb) << 8 | i32::from(lsb);
        if signedness.is_signed() && value & 0x8000 != 0 {
            Ok(-((value ^ 0xFFFF) + 1))
        } else {
            Ok(value)
        }
    }

    /// Build from a value in [-32768, 65535]
    pub fn from_int16(value: i32, endianness: Endianness) -> Result<Self> {
        check_range(value.into(), INT16_MIN.into(), INT16_MAX.into(), 16)?;
        check_word_order(endianness)?;

        let msb = ((value >> 8) & 0xFF) as u8;
        let lsb = (value & 0xFF) as u8;
        Ok(match endianness {
            Endianness::LittleEndian => Self::new([lsb, msb]),
            _ => Self::new([msb, lsb]),
        })
    }
}

// ============================================================================
// 32-bit
// ============================================================================

impl DWord {
    /// Reassemble the four bytes according to `endianness`
    pub fn to_int32(&self, endianness: Endianness, signedness: Signedness) -> i64 {
        let [b1, b2, b3, b4] = endianness.permute4(*self.as_bytes());
        let value = i64::from(b1) << 24 | i64::from(b2) << 16 | i64::from(b3) << 8 | i64::from(b4);

        trace!(
            %endianness,
            "Decoded dword {} as {:#010x}",
            self,
            value
        );

        if signedness.is_signed() && value & 0x8000_0000 != 0 {
            -((value ^ 0xFFFF_FFFF) + 1)
        } else {
            value
        }
    }

    /// Build from a value in [-2147483648, 4294967295]
    pub fn from_int32(value: i64, endianness: Endianness) -> Result<Self> {
        check_range(value, INT32_MIN, INT32_MAX, 32)?;

        let octets = [
            ((value >> 24) & 0xFF) as u8,
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ];
        Ok(Self::new(endianness.permute4(octets)))
    }
}

// ============================================================================
// Hex String Conversions
// ============================================================================

/// Convert a 2-digit hex byte to an integer
///
/// `decode_int8("80", Signed) == -128`, `decode_int8("FF", Unsigned) == 255`
pub fn decode_int8(byte: &str, signedness: Signedness) -> Result<i16> {
    Ok(Byte::from_hex(byte)?.to_int8(signedness))
}

/// Convert an integer in [-128, 255] to a 2-digit lowercase hex byte
pub fn encode_int8(value: i16) -> Result<String> {
    Ok(Byte::from_int8(value)?.to_hex())
}

/// Convert a 4-digit hex word to an integer
///
/// # Errors
/// `UnsupportedEndianness` for the word-swapped orders, `InvalidLength` or
/// `InvalidHex` for malformed input.
pub fn decode_int16(word: &str, endianness: Endianness, signedness: Signedness) -> Result<i32> {
    Word::from_hex(word)?.to_int16(endianness, signedness)
}

/// Convert an integer in [-32768, 65535] to a 4-digit lowercase hex word
pub fn encode_int16(value: i32, endianness: Endianness) -> Result<String> {
    Ok(Word::from_int16(value, endianness)?.to_hex())
}

/// Convert an 8-digit hex double word to an integer
pub fn decode_int32(dword: &str, endianness: Endianness, signedness: Signedness) -> Result<i64> {
    Ok(DWord::from_hex(dword)?.to_int32(endianness, signedness))
}

/// Convert an integer in [-2147483648, 4294967295] to an 8-digit lowercase
/// hex double word
pub fn encode_int32(value: i64, endianness: Endianness) -> Result<String> {
    Ok(DWord::from_int32(value, endianness)?.to_hex())
}
