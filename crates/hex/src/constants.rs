/// Lowercase hex alphabet.
pub const ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Prefix of one escaped byte (`\xx`).
pub const ESCAPE: char = '\\';
