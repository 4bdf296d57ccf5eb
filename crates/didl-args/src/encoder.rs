//! Fixed-shape DIDL argument encoders.
//!
//! Each encoder emits a complete argument list: magic header, type table,
//! argument count, then the argument value. Only three shapes are needed by
//! install calls, so they are written byte by byte instead of through a
//! general type-directed serializer.

use didl_buffers::{uleb128_len, Writer};

use crate::codec::IdentifierCodec;
use crate::constants::{MAGIC, MAX_IDENTIFIER_LEN, TYPE_OPT, TYPE_PRINCIPAL};
use crate::ArgumentError;

/// Encoding of an empty argument list: `DIDL`, no types, no arguments.
pub const EMPTY_ARGUMENT: [u8; 6] = [0x44, 0x49, 0x44, 0x4c, 0x00, 0x00];

/// Returns the empty argument list.
pub fn encode_empty() -> Vec<u8> {
    EMPTY_ARGUMENT.to_vec()
}

/// Encodes a single `principal` argument.
///
/// `principal` is a primitive type, so the type table is empty and the
/// argument type is the primitive code itself. The result is exactly
/// `8 + id.len()` bytes.
///
/// ```
/// use didl_args::encode_principal;
///
/// let bytes = encode_principal(&[0x04]).unwrap();
/// assert_eq!(bytes, [0x44, 0x49, 0x44, 0x4c, 0x00, 0x01, 0x68, 0x01, 0x04]);
/// ```
pub fn encode_principal(id: &[u8]) -> Result<Vec<u8>, ArgumentError> {
    let len = identifier_len(id)?;
    let mut writer = Writer::with_capacity(7 + uleb128_len(len) + id.len());
    writer.buf(&MAGIC);
    writer.uleb128(0);
    writer.uleb128(1);
    writer.u8(TYPE_PRINCIPAL);
    writer.uleb128(len);
    writer.buf(id);
    Ok(writer.flush())
}

/// Encodes a single `opt principal` argument.
///
/// The type table holds one entry, `opt principal`, and the argument
/// refers to it by index 0. `None` encodes as the 11-byte absent value.
pub fn encode_optional_principal(id: Option<&[u8]>) -> Result<Vec<u8>, ArgumentError> {
    let mut writer = Writer::with_capacity(12 + id.map_or(0, |id| id.len() + 1));
    writer.buf(&MAGIC);
    writer.uleb128(1);
    writer.u8(TYPE_OPT);
    writer.u8(TYPE_PRINCIPAL);
    writer.uleb128(1);
    writer.uleb128(0);
    match id {
        None => writer.u8(0x00),
        Some(id) => {
            let len = identifier_len(id)?;
            writer.u8(0x01);
            writer.uleb128(len);
            writer.buf(id);
        }
    }
    Ok(writer.flush())
}

/// Encodes an `opt principal` argument from caller text.
///
/// Empty text, whitespace, and `null` in any case all mean absent. Anything
/// else is decoded with `codec` and embedded.
pub fn encode_optional_principal_text<C>(
    text: &str,
    codec: &C,
) -> Result<Vec<u8>, ArgumentError>
where
    C: IdentifierCodec + ?Sized,
{
    let text = text.trim();
    if text.is_empty() || text.eq_ignore_ascii_case("null") {
        return encode_optional_principal(None);
    }
    let id = codec.decode(text)?;
    encode_optional_principal(Some(id.as_slice()))
}

/// Checks that the identifier length fits a single LEB128 byte.
fn identifier_len(id: &[u8]) -> Result<u64, ArgumentError> {
    if id.len() > MAX_IDENTIFIER_LEN {
        return Err(ArgumentError::IdentifierTooLong {
            len: id.len(),
            max: MAX_IDENTIFIER_LEN,
        });
    }
    Ok(id.len() as u64)
}
