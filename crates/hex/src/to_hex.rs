//! Lowercase hex encoding.

use crate::constants::ALPHABET;

/// Encodes bytes as lowercase hex, two characters per byte, no separators.
///
/// # Example
///
/// ```
/// use didl_hex::to_hex;
///
/// assert_eq!(to_hex(b"DIDL\x00\x00"), "4449444c0000");
/// assert_eq!(to_hex(&[]), "");
/// ```
pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(ALPHABET[(byte >> 4) as usize] as char);
        out.push(ALPHABET[(byte & 0x0f) as usize] as char);
    }
    out
}
