//! Hex input decoding for captured packets.
//!
//! Accepts the forms packet dumps usually come in: `30 29 02 01`,
//! `30:29:02:01`, `302902 01`, with an optional `0x` prefix.

/// Error from [`decode_hex`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexDecodeError {
    /// A character that is not a hex digit or separator.
    #[error("invalid hex character {ch:?} at position {position}")]
    InvalidChar { ch: char, position: usize },
    /// Odd number of hex digits.
    #[error("odd number of hex digits ({digits})")]
    OddLength { digits: usize },
}

/// Decode a hex string, ignoring whitespace and `:` separators.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, HexDecodeError> {
    let leading = input.len() - input.trim_start().len();
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    // Positions are reported against the caller's input
    let base = leading + (trimmed.len() - body.len());

    let mut digits = Vec::with_capacity(body.len());
    for (index, ch) in body.char_indices() {
        if ch.is_whitespace() || ch == ':' {
            continue;
        }
        let nibble = ch.to_digit(16).ok_or(HexDecodeError::InvalidChar {
            ch,
            position: base + index,
        })?;
        digits.push(nibble as u8);
    }

    if digits.len() % 2 != 0 {
        return Err(HexDecodeError::OddLength {
            digits: digits.len(),
        });
    }

    Ok(digits
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

/// Encode bytes as lowercase hex with no separator.
pub fn encode_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
