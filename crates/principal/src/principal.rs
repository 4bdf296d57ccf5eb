use std::fmt;
use std::str::FromStr;

use crate::base32::{decode_base32, encode_base32};
use crate::crc32::crc32;
use crate::PrincipalError;

/// Longest identifier the platform issues.
pub const MAX_LENGTH_IN_BYTES: usize = 29;

/// Length of the CRC32 prefix in the textual form.
pub const CHECKSUM_LENGTH: usize = 4;

const GROUP_LENGTH: usize = 5;

/// An opaque principal identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Principal {
    bytes: Vec<u8>,
}

impl Principal {
    /// The management canister, whose identifier is empty.
    pub fn management_canister() -> Self {
        Self { bytes: Vec::new() }
    }

    /// The anonymous caller.
    pub fn anonymous() -> Self {
        Self { bytes: vec![0x04] }
    }

    /// Wraps raw identifier bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, PrincipalError> {
        if bytes.len() > MAX_LENGTH_IN_BYTES {
            return Err(PrincipalError::TooLong {
                len: bytes.len(),
                max: MAX_LENGTH_IN_BYTES,
            });
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Parses the textual form. Case-insensitive; dashes must sit exactly
    /// where [`Principal::to_text`] puts them.
    pub fn from_text(text: &str) -> Result<Self, PrincipalError> {
        let lowered = text.to_ascii_lowercase();
        let compact: String = lowered.chars().filter(|&c| c != '-').collect();
        let decoded = decode_base32(&compact)?;
        if decoded.len() < CHECKSUM_LENGTH {
            return Err(PrincipalError::TextTooSmall(decoded.len()));
        }
        let (checksum, bytes) = decoded.split_at(CHECKSUM_LENGTH);
        let principal = Self::from_slice(bytes)?;
        if checksum != crc32(bytes).to_be_bytes() {
            return Err(PrincipalError::ChecksumMismatch);
        }
        let canonical = principal.to_text();
        if canonical != lowered {
            return Err(PrincipalError::AbnormalGrouping(canonical));
        }
        Ok(principal)
    }

    /// Renders the canonical textual form.
    pub fn to_text(&self) -> String {
        let mut payload = Vec::with_capacity(CHECKSUM_LENGTH + self.bytes.len());
        payload.extend_from_slice(&crc32(&self.bytes).to_be_bytes());
        payload.extend_from_slice(&self.bytes);
        let encoded = encode_base32(&payload);

        let mut out = String::with_capacity(encoded.len() + encoded.len() / GROUP_LENGTH);
        for (i, c) in encoded.chars().enumerate() {
            if i > 0 && i % GROUP_LENGTH == 0 {
                out.push('-');
            }
            out.push(c);
        }
        out
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl FromStr for Principal {
    type Err = PrincipalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

impl AsRef<[u8]> for Principal {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
