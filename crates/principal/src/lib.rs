//! Principal identifiers and their textual form.
//!
//! A principal is an opaque byte string of at most [`MAX_LENGTH_IN_BYTES`]
//! bytes. Its textual form is the lowercase, unpadded base32 encoding of a
//! big-endian CRC32 checksum followed by the bytes, split into groups of five
//! characters joined by `-`:
//!
//! ```
//! use didl_principal::Principal;
//!
//! let anonymous = Principal::from_text("2vxsx-fae").unwrap();
//! assert_eq!(anonymous.as_slice(), &[0x04]);
//! assert_eq!(Principal::management_canister().to_text(), "aaaaa-aa");
//! ```

mod base32;
mod crc32;
mod principal;

pub use base32::{decode_base32, encode_base32};
pub use crc32::crc32;
pub use principal::{Principal, CHECKSUM_LENGTH, MAX_LENGTH_IN_BYTES};

use thiserror::Error;

/// Error type for principal parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrincipalError {
    #[error("principal has {len} bytes, at most {max} are allowed")]
    TooLong { len: usize, max: usize },
    #[error("principal text is not valid base32: {0:?} at position {1}")]
    InvalidBase32(char, usize),
    #[error("principal text decodes to {0} bytes, shorter than its checksum")]
    TextTooSmall(usize),
    #[error("principal checksum mismatch")]
    ChecksumMismatch,
    #[error("principal text is not grouped canonically, expected {0}")]
    AbnormalGrouping(String),
}
