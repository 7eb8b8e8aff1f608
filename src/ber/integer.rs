//! BER INTEGER content decoding.
//!
//! Both decoders take the content octets only (tag and length already stripped).
//! Redundant leading sign octets are skipped first. Content still longer than 8
//! bytes cannot be represented and is truncated to its first 8 bytes with a
//! warning, the same permissive policy net-snmp uses.

/// Widest content (in bytes) that fits a 64-bit accumulator.
const MAX_INT_BYTES: usize = 8;

/// Decode a signed two's-complement big-endian integer.
///
/// Returns `None` on empty content.
pub fn parse_int(content: &[u8]) -> Option<i64> {
    let mut content = content;
    // Redundant sign octets carry no value
    while content.len() > MAX_INT_BYTES
        && matches!((content[0], content[1] & 0x80), (0x00, 0x00) | (0xFF, 0x80))
    {
        content = &content[1..];
    }

    let first = *content.first()?;
    if content.len() > MAX_INT_BYTES {
        tracing::warn!(target: "snmp_ber::ber", { length = content.len() }, "integer too long, truncating to 8 bytes");
    }

    // Sign extend
    let mut value: i64 = if first & 0x80 != 0 { -1 } else { 0 };
    for &byte in content.iter().take(MAX_INT_BYTES) {
        value = (value << 8) | i64::from(byte);
    }

    Some(value)
}

/// Decode an unsigned big-endian integer (Counter64).
///
/// No sign adjustment is applied: BER prefixes a 0x00 byte when the top bit of the
/// magnitude is set, so a 9-byte encoding with a leading zero is still a valid u64.
/// Leading zero bytes are dropped before the 8-byte truncation applies.
///
/// Returns `None` on empty content.
pub fn parse_uint64(content: &[u8]) -> Option<u64> {
    if content.is_empty() {
        return None;
    }

    let mut bytes = content;
    while bytes.len() > MAX_INT_BYTES && bytes[0] == 0x00 {
        bytes = &bytes[1..];
    }

    if bytes.len() > MAX_INT_BYTES {
        tracing::warn!(target: "snmp_ber::ber", { length = bytes.len() }, "unsigned integer too long, truncating to 8 bytes");
        bytes = &bytes[..MAX_INT_BYTES];
    }

    let mut value: u64 = 0;
    for &byte in bytes {
        value = (value << 8) | u64::from(byte);
    }

    Some(value)
}

/// Read a 2-byte big-endian unsigned field.
///
/// Only the first two bytes are looked at; shorter input fails.
pub fn parse_uint16(content: &[u8]) -> crate::error::Result<u16> {
    match content {
        [hi, lo, ..] => Ok((u16::from(*hi) << 8) | u16::from(*lo)),
        _ => Err(crate::error::Error::decode(
            0,
            crate::error::DecodeErrorKind::InsufficientData {
                needed: 2,
                available: content.len(),
            },
        )),
    }
}
