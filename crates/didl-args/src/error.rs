use didl_buffers::BufferError;
use didl_hex::HexError;
use didl_principal::PrincipalError;
use thiserror::Error;

/// Error type for building an argument or an install payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("blob text is empty")]
    EmptyInput,
    #[error("principal mode requires an identifier")]
    MissingIdentifier,
    #[error("blob mode requires blob text")]
    MissingBlobText,
    #[error("hex mode requires hex text")]
    MissingHexText,
    #[error("target identifier is empty")]
    MissingTarget,
    #[error("module image is empty")]
    MissingModule,
    #[error("invalid hex argument: {0}")]
    Hex(#[from] HexError),
    #[error("invalid identifier: {0}")]
    Identifier(#[from] PrincipalError),
    #[error("identifier is {len} bytes, the length prefix holds at most {max}")]
    IdentifierTooLong { len: usize, max: usize },
    #[error("character {ch:?} at position {position} does not fit in one byte")]
    NonByteCharacter { position: usize, ch: char },
}

/// Error type for reading back an encoded argument.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InspectError {
    #[error("argument does not start with the DIDL magic header")]
    MissingMagic,
    #[error("truncated argument: {0}")]
    Buffer(#[from] BufferError),
    #[error("invalid opt tag {0:#04x}")]
    InvalidOptTag(u8),
    #[error("{0} trailing byte(s) after the argument value")]
    TrailingBytes(usize),
}
