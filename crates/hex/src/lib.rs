//! Hex encoding/decoding for DIDL byte sequences.
//!
//! Two textual forms are supported:
//!
//! - plain lowercase hex (`4449444c0000`), see [`to_hex`] and [`from_hex`];
//! - escaped hex (`\44\49\44\4c\00\00`), the shape command-line DIDL tooling
//!   prints for blobs, see [`to_escaped_hex`].

mod constants;
mod escaped;
mod from_hex;
mod to_hex;

pub use constants::{ALPHABET, ESCAPE};
pub use escaped::to_escaped_hex;
pub use from_hex::{from_hex, hex_value};
pub use to_hex::to_hex;

use thiserror::Error;

/// Error type for hex decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HexError {
    /// The digit string (after stripping `0x` and whitespace) has an odd length.
    #[error("hex input has odd length {len}")]
    OddLength { len: usize },
    /// A two-character group is not base-16. `position` is the character
    /// index of the group's first character in the cleaned digit string.
    #[error("invalid hex digit at position {position}")]
    InvalidDigit { position: usize },
}
