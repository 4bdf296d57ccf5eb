//! RFC 4648 base32, lowercase, without padding.

use crate::PrincipalError;

const ALPHABET: &[u8; 32] = b"abcdefghijklmnopqrstuvwxyz234567";

/// Encodes bytes as lowercase unpadded base32.
///
/// ```
/// use didl_principal::encode_base32;
///
/// assert_eq!(encode_base32(b"foobar"), "mzxw6ytboi");
/// ```
pub fn encode_base32(bytes: &[u8]) -> String {
    let mut out = String::with_capacity((bytes.len() * 8).div_ceil(5));
    let mut buffer: u16 = 0;
    let mut bits = 0u32;
    for &byte in bytes {
        buffer = (buffer << 8) | u16::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            out.push(ALPHABET[((buffer >> bits) & 0x1f) as usize] as char);
        }
        buffer &= (1 << bits) - 1;
    }
    if bits > 0 {
        out.push(ALPHABET[((buffer << (5 - bits)) & 0x1f) as usize] as char);
    }
    out
}

/// Decodes lowercase unpadded base32. Leftover bits shorter than a byte are dropped.
pub fn decode_base32(text: &str) -> Result<Vec<u8>, PrincipalError> {
    let mut out = Vec::with_capacity(text.len() * 5 / 8);
    let mut buffer: u16 = 0;
    let mut bits = 0u32;
    for (position, c) in text.chars().enumerate() {
        let value = match c {
            'a'..='z' => c as u16 - 'a' as u16,
            '2'..='7' => c as u16 - '2' as u16 + 26,
            _ => return Err(PrincipalError::InvalidBase32(c, position)),
        };
        buffer = (buffer << 5) | value;
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push((buffer >> bits) as u8);
            buffer &= (1 << bits) - 1;
        }
    }
    Ok(out)
}
