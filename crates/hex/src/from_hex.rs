//! Hex decoding with positional error reporting.

use crate::HexError;

/// Returns the value of one hex digit, accepting either case.
#[inline]
pub fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decodes a hex string into bytes.
///
/// An optional `0x`/`0X` prefix and all whitespace are removed first. The
/// remaining digits must come in pairs; a pair that is not base-16 fails the
/// whole call and reports the character position of the pair so a caller can
/// point at it.
///
/// # Example
///
/// ```
/// use didl_hex::{from_hex, HexError};
///
/// assert_eq!(from_hex("0x4449 444C").unwrap(), b"DIDL");
/// assert_eq!(from_hex("abc"), Err(HexError::OddLength { len: 3 }));
/// assert_eq!(from_hex("00zz"), Err(HexError::InvalidDigit { position: 2 }));
/// ```
pub fn from_hex(text: &str) -> Result<Vec<u8>, HexError> {
    let trimmed = text.trim_start();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: Vec<char> = body.chars().filter(|c| !c.is_whitespace()).collect();

    if digits.len() % 2 != 0 {
        return Err(HexError::OddLength { len: digits.len() });
    }

    let mut out = Vec::with_capacity(digits.len() / 2);
    for (pair_index, pair) in digits.chunks_exact(2).enumerate() {
        let position = pair_index * 2;
        let (hi, lo) = match (digit(pair[0]), digit(pair[1])) {
            (Some(hi), Some(lo)) => (hi, lo),
            _ => return Err(HexError::InvalidDigit { position }),
        };
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

fn digit(c: char) -> Option<u8> {
    if c.is_ascii() {
        hex_value(c as u8)
    } else {
        None
    }
}
