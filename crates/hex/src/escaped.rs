//! Escaped hex (`\xx` per byte).

use crate::constants::{ALPHABET, ESCAPE};

/// Encodes every byte as a backslash followed by two lowercase hex digits.
///
/// # Example
///
/// ```
/// use didl_hex::to_escaped_hex;
///
/// assert_eq!(to_escaped_hex(b"DIDL\x00"), "\\44\\49\\44\\4c\\00");
/// ```
pub fn to_escaped_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for &byte in bytes {
        out.push(ESCAPE);
        out.push(ALPHABET[(byte >> 4) as usize] as char);
        out.push(ALPHABET[(byte & 0x0f) as usize] as char);
    }
    out
}
