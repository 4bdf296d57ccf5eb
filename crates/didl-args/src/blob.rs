//! Textual DIDL blob parsing.
//!
//! Command-line tooling prints DIDL payloads in several shapes: with or
//! without a `blob` keyword, quoted or bare, with the magic header spelled
//! as `DIDL` or escaped as `\44\49\44\4c`, or with no header at all.
//! [`parse_blob`] accepts all of them and returns canonical bytes.

use didl_hex::{hex_value, ESCAPE};

use crate::constants::MAGIC;
use crate::ArgumentError;

const BLOB_KEYWORD: &str = "blob ";

/// Parses a textual DIDL blob into bytes, prepending the magic header if the
/// text did not carry one.
///
/// A backslash followed by two hex digits is one escaped byte. Every other
/// character stands for its own code point, which must fit in a byte. An
/// input that contains nothing after the keyword and quotes are removed
/// yields an empty sequence.
///
/// # Example
///
/// ```
/// use didl_args::parse_blob;
///
/// let bytes = parse_blob(r#"blob "DIDL\00\01h\02""#).unwrap();
/// assert_eq!(bytes, [0x44, 0x49, 0x44, 0x4c, 0x00, 0x01, 0x68, 0x02]);
///
/// let bytes = parse_blob(r"\00\01h").unwrap();
/// assert_eq!(bytes, [0x44, 0x49, 0x44, 0x4c, 0x00, 0x01, 0x68]);
/// ```
pub fn parse_blob(text: &str) -> Result<Vec<u8>, ArgumentError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ArgumentError::EmptyInput);
    }

    let body = strip_quotes(strip_keyword(trimmed));
    let chars: Vec<char> = body.chars().collect();

    let mut bytes = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == ESCAPE && i + 2 < chars.len() {
            if let Some(byte) = escaped_byte(chars[i + 1], chars[i + 2]) {
                bytes.push(byte);
                i += 3;
                continue;
            }
        }
        let ch = chars[i];
        let code = u32::from(ch);
        if code > 0xff {
            return Err(ArgumentError::NonByteCharacter { position: i, ch });
        }
        bytes.push(code as u8);
        i += 1;
    }

    if bytes.is_empty() || bytes.starts_with(&MAGIC) {
        return Ok(bytes);
    }
    let mut message = MAGIC.to_vec();
    message.append(&mut bytes);
    Ok(message)
}

fn strip_keyword(text: &str) -> &str {
    match text.get(..BLOB_KEYWORD.len()) {
        Some(head) if head.eq_ignore_ascii_case(BLOB_KEYWORD) => &text[BLOB_KEYWORD.len()..],
        _ => text,
    }
}

fn strip_quotes(text: &str) -> &str {
    for quote in ['"', '\''] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            return &text[1..text.len() - 1];
        }
    }
    text
}

fn escaped_byte(hi: char, lo: char) -> Option<u8> {
    if !hi.is_ascii() || !lo.is_ascii() {
        return None;
    }
    Some((hex_value(hi as u8)? << 4) | hex_value(lo as u8)?)
}
