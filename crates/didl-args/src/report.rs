//! Text rendering of a built argument, as printed by the `didl-args` tool.

use std::io::{self, Read};

use serde::Serialize;

use crate::{inspect_argument, ArgumentMode, ArgumentShape, IdentifierCodec};

/// How the argument bytes are printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Hex,
    /// `\xx` per byte, the spelling blob mode reads back.
    Escaped,
    /// A [`Report`] object.
    Json,
}

/// JSON form of a built argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub mode: ArgumentMode,
    pub hex: String,
    pub len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
}

/// Output of [`render`], split by stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub stdout: String,
    /// Shape note for the non-JSON formats.
    pub stderr: Option<String>,
}

/// Returns the argument text named on the command line. `-` reads all of
/// `stdin`, a missing argument is the empty string.
pub fn read_argument_text<R: Read>(text: Option<&str>, mut stdin: R) -> io::Result<String> {
    match text {
        Some("-") => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(text) => Ok(text.to_owned()),
        None => Ok(String::new()),
    }
}

/// One-line, DIDL-text-like description of an inspected argument.
pub fn describe_shape<C>(shape: &ArgumentShape, codec: &C) -> String
where
    C: IdentifierCodec + ?Sized,
{
    match shape {
        ArgumentShape::Empty => "()".to_owned(),
        ArgumentShape::Principal(id) => format!("(principal \"{}\")", codec.encode(id)),
        ArgumentShape::OptionalPrincipal(None) => "(null : opt principal)".to_owned(),
        ArgumentShape::OptionalPrincipal(Some(id)) => {
            format!("(opt principal \"{}\")", codec.encode(id))
        }
        ArgumentShape::Other {
            type_table_len,
            arg_count: Some(count),
        } => format!("{count} argument(s), {type_table_len} type table entries"),
        ArgumentShape::Other {
            type_table_len,
            arg_count: None,
        } => format!("{type_table_len} type table entries"),
    }
}

/// Like [`describe_shape`], but for raw bytes that may not decode. Hex mode
/// passes bytes through unchecked, so failures are reported, not raised.
pub fn describe_bytes<C>(bytes: &[u8], codec: &C) -> String
where
    C: IdentifierCodec + ?Sized,
{
    match inspect_argument(bytes) {
        Ok(shape) => describe_shape(&shape, codec),
        Err(err) => format!("unreadable: {err}"),
    }
}

/// Renders `bytes` in `format`. With `inspect`, the shape goes into the JSON
/// object, or to stderr for the plain formats.
pub fn render<C>(
    mode: ArgumentMode,
    bytes: &[u8],
    format: OutputFormat,
    inspect: bool,
    codec: &C,
) -> serde_json::Result<Rendered>
where
    C: IdentifierCodec + ?Sized,
{
    let shape = inspect.then(|| describe_bytes(bytes, codec));
    let stdout = match format {
        OutputFormat::Hex => didl_hex::to_hex(bytes),
        OutputFormat::Escaped => didl_hex::to_escaped_hex(bytes),
        OutputFormat::Json => {
            let report = Report {
                mode,
                hex: didl_hex::to_hex(bytes),
                len: bytes.len(),
                shape,
            };
            return Ok(Rendered {
                stdout: serde_json::to_string_pretty(&report)?,
                stderr: None,
            });
        }
    };
    Ok(Rendered {
        stdout,
        stderr: shape,
    })
}
