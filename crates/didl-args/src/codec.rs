//! Identifier codec seam.

use didl_principal::Principal;

use crate::ArgumentError;

/// Converts caller-supplied identifier text to the opaque bytes embedded in
/// an argument, and back.
///
/// Implementations report malformed text with whichever [`ArgumentError`]
/// variant describes it; the textual principal codec uses
/// [`ArgumentError::Identifier`].
pub trait IdentifierCodec {
    fn decode(&self, text: &str) -> Result<Vec<u8>, ArgumentError>;

    fn encode(&self, bytes: &[u8]) -> String;
}

/// [`IdentifierCodec`] for the platform's textual principal format.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextualPrincipalCodec;

impl IdentifierCodec for TextualPrincipalCodec {
    fn decode(&self, text: &str) -> Result<Vec<u8>, ArgumentError> {
        Ok(Principal::from_text(text.trim())?.into_bytes())
    }

    fn encode(&self, bytes: &[u8]) -> String {
        match Principal::from_slice(bytes) {
            Ok(principal) => principal.to_text(),
            // Not a platform principal; show it raw.
            Err(_) => didl_hex::to_hex(bytes),
        }
    }
}
