//! Module image sniffing.
//!
//! The check is advisory: an unrecognized prefix produces a warning, never a
//! rejection, since compressed or future module formats may not match.

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::constants::{GZIP_MAGIC, WASM_MAGIC};

/// What a module image's leading bytes look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModuleFormat {
    Wasm,
    GzipWasm,
    Unknown,
}

/// Advisory finding about a module image.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModuleWarning {
    #[error("module does not start with a WebAssembly or gzip header (first bytes: {prefix})")]
    UnrecognizedMagic { prefix: String },
}

/// Classifies a module image by its magic bytes.
///
/// ```
/// use didl_args::{sniff_module, ModuleFormat};
///
/// assert_eq!(sniff_module(b"\0asm\x01\0\0\0"), ModuleFormat::Wasm);
/// assert_eq!(sniff_module(&[0x1f, 0x8b, 0x08]), ModuleFormat::GzipWasm);
/// assert_eq!(sniff_module(b"PK"), ModuleFormat::Unknown);
/// ```
pub fn sniff_module(module: &[u8]) -> ModuleFormat {
    if module.starts_with(&WASM_MAGIC) {
        ModuleFormat::Wasm
    } else if module.starts_with(&GZIP_MAGIC) {
        ModuleFormat::GzipWasm
    } else {
        ModuleFormat::Unknown
    }
}

/// Returns a warning when the module's format is not recognized, logging it too.
pub fn check_module(module: &[u8]) -> Option<ModuleWarning> {
    match sniff_module(module) {
        ModuleFormat::Wasm | ModuleFormat::GzipWasm => None,
        ModuleFormat::Unknown => {
            let warning = ModuleWarning::UnrecognizedMagic {
                prefix: didl_buffers::print_octets(module, WASM_MAGIC.len()),
            };
            warn!(len = module.len(), "{warning}");
            Some(warning)
        }
    }
}
