//! Bit layout helpers for the 18-bit counter and the fixed fields.
//!
//! The counter straddles three octets of the identifier:
//!
//! ```text
//! |    octet 6    |    octet 7    |    octet 8    |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |  ver  |c17..14|    c13..c6    |var|  c5..c0   |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```

/// The largest value the dedicated counter can hold.
pub const MAX_COUNTER: u32 = (1 << 18) - 1;

/// Largest timestamp representable in the 48-bit `unix_ts_ms` field.
pub const MAX_TIMESTAMP: u64 = (1 << 48) - 1;

/// Splits `counter` into the bits stored in octets 6, 7, and 8.
///
/// The first element carries counter bits 17..14 in its low nibble and the third carries bits
/// 5..0 in its low six bits; the version and variant positions are left zero. Bits above the
/// 18-bit range are discarded.
pub const fn pack_counter(counter: u32) -> (u8, u8, u8) {
    (
        ((counter >> 14) & 0x0f) as u8,
        (counter >> 6) as u8,
        (counter & 0x3f) as u8,
    )
}

/// Reassembles the 18-bit counter from octets 6, 7, and 8, ignoring the version and variant
/// bits that share those octets.
pub const fn unpack_counter(byte6: u8, byte7: u8, byte8: u8) -> u32 {
    ((byte6 as u32 & 0x0f) << 14) | ((byte7 as u32) << 6) | (byte8 as u32 & 0x3f)
}

/// Writes the low 48 bits of `unix_ts_ms` into octets 0..6 in big-endian order.
pub(crate) fn write_timestamp(bytes: &mut [u8; 16], unix_ts_ms: u64) {
    bytes[..6].copy_from_slice(&unix_ts_ms.to_be_bytes()[2..]);
}

/// Stamps the version (`0111`) and variant (`10`) tags over whatever octets 6 and 8 hold.
pub(crate) fn set_version_and_variant(bytes: &mut [u8; 16]) {
    bytes[6] = (bytes[6] & 0x0f) | 0x70;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;
}
