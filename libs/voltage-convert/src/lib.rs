//! Voltage Conversion Library
//!
//! Bit-exact numeric transforms shared by the VoltageEMS protocol layers.
//!
//! # Architecture
//!
//! This library provides:
//! - **Bytes Codec**: 8/16/32-bit integers ↔ hex byte strings under four byte
//!   orders (ABCD, BADC, DCBA, CDAB) and signed/unsigned interpretation
//! - **GPS Time**: GPS ↔ Unix epoch seconds with the leap-second table
//! - **Codec Options**: byte order/signedness defaults loadable from file or env
//!
//! All conversions are pure functions; nothing here holds state.
//!
//! # Examples
//!
//! ```rust
//! use voltage_convert::{decode_int32, encode_int16, Endianness, Signedness};
//!
//! let value = decode_int32("56781234", Endianness::MidLittleEndian, Signedness::Unsigned)?;
//! assert_eq!(value, 0x12345678);
//!
//! assert_eq!(encode_int16(-32768, Endianness::BigEndian)?, "8000");
//! # Ok::<(), voltage_convert::ConvertError>(())
//! ```

pub mod bytes;
pub mod error;
pub mod gps_time;
pub mod options;

// Re-export core types
pub use bytes::{
    decode_int16, decode_int32, decode_int8, encode_int16, encode_int32, encode_int8, Byte,
    ByteQuantity, DWord, Endianness, Signedness, Word,
};
pub use error::{ConvertError, Result};
pub use gps_time::{gps_to_unix, unix_to_gps};
pub use options::CodecOptions;
