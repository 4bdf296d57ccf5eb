//! Reading encoded arguments back.

use didl_buffers::Reader;

use crate::constants::{MAGIC, TYPE_OPT, TYPE_PRINCIPAL};
use crate::InspectError;

const PRINCIPAL_CODE: i64 = TYPE_PRINCIPAL as i64 - 0x80;
const OPT_CODE: i64 = TYPE_OPT as i64 - 0x80;

/// Argument list recognized by [`inspect_argument`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentShape {
    /// No arguments.
    Empty,
    /// A single `principal`.
    Principal(Vec<u8>),
    /// A single `opt principal`.
    OptionalPrincipal(Option<Vec<u8>>),
    /// Anything else. The value section is not decoded. `arg_count` is
    /// `None` when the type table uses types this reader cannot skip.
    Other {
        type_table_len: u64,
        arg_count: Option<u64>,
    },
}

/// Decodes the header of an argument list and, for the shapes the encoders
/// in this crate produce, its value.
///
/// ```
/// use didl_args::{encode_principal, inspect_argument, ArgumentShape};
///
/// let bytes = encode_principal(&[0x04]).unwrap();
/// assert_eq!(inspect_argument(&bytes), Ok(ArgumentShape::Principal(vec![0x04])));
/// ```
pub fn inspect_argument(bytes: &[u8]) -> Result<ArgumentShape, InspectError> {
    let mut reader = Reader::new(bytes);
    if reader.buf(MAGIC.len()).ok() != Some(&MAGIC[..]) {
        return Err(InspectError::MissingMagic);
    }

    let type_table_len = reader.uleb128()?;
    let mut table = Vec::new();
    for _ in 0..type_table_len {
        let opcode = reader.sleb128()?;
        if opcode != OPT_CODE {
            return Ok(ArgumentShape::Other {
                type_table_len,
                arg_count: None,
            });
        }
        table.push(reader.sleb128()?);
    }

    let arg_count = reader.uleb128()?;
    let mut arg_types = Vec::new();
    for _ in 0..arg_count {
        arg_types.push(reader.sleb128()?);
    }

    let shape = match (table.as_slice(), arg_types.as_slice()) {
        ([], []) => ArgumentShape::Empty,
        ([], [PRINCIPAL_CODE]) => ArgumentShape::Principal(read_identifier(&mut reader)?),
        ([PRINCIPAL_CODE], [0]) => match reader.u8()? {
            0x00 => ArgumentShape::OptionalPrincipal(None),
            0x01 => ArgumentShape::OptionalPrincipal(Some(read_identifier(&mut reader)?)),
            tag => return Err(InspectError::InvalidOptTag(tag)),
        },
        _ => {
            return Ok(ArgumentShape::Other {
                type_table_len,
                arg_count: Some(arg_count),
            })
        }
    };

    match reader.size() {
        0 => Ok(shape),
        n => Err(InspectError::TrailingBytes(n)),
    }
}

fn read_identifier(reader: &mut Reader<'_>) -> Result<Vec<u8>, InspectError> {
    let len = reader.uleb128()?;
    let len = usize::try_from(len).unwrap_or(usize::MAX);
    Ok(reader.buf(len)?.to_vec())
}
