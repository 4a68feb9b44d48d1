//! Binary data conversion utilities
//!
//! Converts 8/16/32-bit integers to and from their hex byte form under an
//! explicit byte order and signedness.
//!
//! # Design Principles
//!
//! - **Type-safe**: `Endianness` and `Signedness` enums instead of numeric codes
//! - **Explicit failures**: wrong lengths, out-of-range values and word-swapped
//!   orders at 16 bits are errors, never truncations
//! - **Pure**: no state, every call is independent

pub mod conversions;
pub mod endianness;
pub mod quantity;
pub mod signedness;

pub use conversions::*;
pub use endianness::Endianness;
pub use quantity::{Byte, ByteQuantity, DWord, Word};
pub use signedness::Signedness;
