//! Assembling the argument and payload of an install call.

use tracing::debug;

use crate::blob::parse_blob;
use crate::codec::IdentifierCodec;
use crate::encoder::{encode_empty, encode_optional_principal_text, encode_principal};
use crate::module::{check_module, ModuleWarning};
use crate::{ArgumentError, ArgumentMode, InstallMode};

/// Builds the argument bytes for `mode` from the caller's `text`.
///
/// `text` is ignored for [`ArgumentMode::None`]. For the other modes it is the
/// identifier, hex string or blob to encode; blank text is rejected where a
/// value is required.
///
/// ```
/// use didl_args::{build_argument, ArgumentMode, TextualPrincipalCodec};
///
/// let bytes = build_argument(ArgumentMode::Hex, "4449444c0000", &TextualPrincipalCodec).unwrap();
/// assert_eq!(bytes, b"DIDL\x00\x00");
/// ```
pub fn build_argument<C>(
    mode: ArgumentMode,
    text: &str,
    codec: &C,
) -> Result<Vec<u8>, ArgumentError>
where
    C: IdentifierCodec + ?Sized,
{
    let blank = text.trim().is_empty();
    let bytes = match mode {
        ArgumentMode::None => encode_empty(),
        ArgumentMode::Principal => {
            if blank {
                return Err(ArgumentError::MissingIdentifier);
            }
            encode_principal(&codec.decode(text)?)?
        }
        ArgumentMode::OptionalPrincipal => encode_optional_principal_text(text, codec)?,
        ArgumentMode::DidlBlob => {
            if blank {
                return Err(ArgumentError::MissingBlobText);
            }
            parse_blob(text)?
        }
        ArgumentMode::Hex => {
            if blank {
                return Err(ArgumentError::MissingHexText);
            }
            didl_hex::from_hex(text)?
        }
    };
    debug!(%mode, len = bytes.len(), "built argument");
    Ok(bytes)
}

/// Everything the install call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradePayload {
    pub mode: InstallMode,
    pub target_id: Vec<u8>,
    pub module: Vec<u8>,
    pub arg: Vec<u8>,
}

/// A payload together with the advisory warnings raised while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPayload {
    pub payload: UpgradePayload,
    pub warnings: Vec<ModuleWarning>,
}

/// Collects the inputs of an install call and turns them into an
/// [`UpgradePayload`].
///
/// The builder performs no I/O and keeps nothing between builds; calling
/// [`build`](Self::build) twice with the same codec gives the same result.
///
/// ```
/// use didl_args::{ArgumentMode, InstallMode, TextualPrincipalCodec, UpgradePayloadBuilder};
///
/// let built = UpgradePayloadBuilder::new(InstallMode::Upgrade)
///     .target("ryjl3-tyaaa-aaaaa-aaaba-cai")
///     .module(b"\0asm\x01\0\0\0".to_vec())
///     .argument(ArgumentMode::OptionalPrincipal, "null")
///     .build(&TextualPrincipalCodec)
///     .unwrap();
/// assert_eq!(built.payload.arg.len(), 11);
/// assert!(built.warnings.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct UpgradePayloadBuilder {
    mode: InstallMode,
    target: String,
    module: Vec<u8>,
    arg_mode: ArgumentMode,
    arg_text: String,
}

impl UpgradePayloadBuilder {
    pub fn new(mode: InstallMode) -> Self {
        Self {
            mode,
            target: String::new(),
            module: Vec::new(),
            arg_mode: ArgumentMode::None,
            arg_text: String::new(),
        }
    }

    /// Sets the textual identifier of the unit being installed.
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Sets the module image.
    pub fn module(mut self, module: Vec<u8>) -> Self {
        self.module = module;
        self
    }

    /// Selects the argument mode and its input text.
    pub fn argument(mut self, mode: ArgumentMode, text: impl Into<String>) -> Self {
        self.arg_mode = mode;
        self.arg_text = text.into();
        self
    }

    pub fn build<C>(&self, codec: &C) -> Result<BuiltPayload, ArgumentError>
    where
        C: IdentifierCodec + ?Sized,
    {
        if self.target.trim().is_empty() {
            return Err(ArgumentError::MissingTarget);
        }
        let target_id = codec.decode(&self.target)?;
        if self.module.is_empty() {
            return Err(ArgumentError::MissingModule);
        }
        let arg = build_argument(self.arg_mode, &self.arg_text, codec)?;
        let warnings: Vec<ModuleWarning> = check_module(&self.module).into_iter().collect();

        debug!(
            mode = %self.mode,
            target = %codec.encode(&target_id),
            module_len = self.module.len(),
            arg_len = arg.len(),
            "built install payload"
        );
        Ok(BuiltPayload {
            payload: UpgradePayload {
                mode: self.mode,
                target_id,
                module: self.module.clone(),
                arg,
            },
            warnings,
        })
    }
}
