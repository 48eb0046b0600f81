//! Low-level byte decoding utilities.

use byteorder::{BigEndian, ByteOrder};

/// Decode a 4-byte big-endian field.
///
/// All multi-byte integers in the container are stored most significant
/// byte first, regardless of the host architecture.
pub fn read_u32_be(bytes: &[u8]) -> u32 {
    BigEndian::read_u32(bytes)
}

/// Decode a 2-byte big-endian field.
pub fn read_u16_be(bytes: &[u8]) -> u16 {
    BigEndian::read_u16(bytes)
}
