//! DIDL argument construction for install, reinstall and upgrade calls.
//!
//! The argument of such a call is a DIDL message that must be byte-exact:
//! a wrong length prefix or type tag corrupts the call. This crate builds
//! those bytes from caller input and never returns a partial sequence.
//!
//! - [`build_argument`] dispatches on [`ArgumentMode`] to one of the
//!   encoders below.
//! - [`encode_empty`], [`encode_principal`], [`encode_optional_principal`]
//!   write the fixed argument shapes.
//! - [`parse_blob`] normalizes textual blobs printed by command-line tooling.
//! - [`UpgradePayloadBuilder`] combines target, module image and argument.
//! - [`inspect_argument`] reads an encoded argument back.
//! - [`render`] prints an argument the way the `didl-args` tool does.
//!
//! # Example
//!
//! ```
//! use didl_args::{build_argument, inspect_argument, ArgumentMode, ArgumentShape, TextualPrincipalCodec};
//!
//! let bytes = build_argument(ArgumentMode::OptionalPrincipal, "2vxsx-fae", &TextualPrincipalCodec).unwrap();
//! assert_eq!(
//!     inspect_argument(&bytes).unwrap(),
//!     ArgumentShape::OptionalPrincipal(Some(vec![0x04]))
//! );
//! ```

mod blob;
mod builder;
mod codec;
mod constants;
mod encoder;
mod error;
mod inspect;
mod mode;
mod module;
mod report;

pub use blob::parse_blob;
pub use builder::{build_argument, BuiltPayload, UpgradePayload, UpgradePayloadBuilder};
pub use codec::{IdentifierCodec, TextualPrincipalCodec};
pub use constants::{GZIP_MAGIC, MAGIC, MAX_IDENTIFIER_LEN, TYPE_OPT, TYPE_PRINCIPAL, WASM_MAGIC};
pub use encoder::{
    encode_empty, encode_optional_principal, encode_optional_principal_text, encode_principal,
    EMPTY_ARGUMENT,
};
pub use error::{ArgumentError, InspectError};
pub use inspect::{inspect_argument, ArgumentShape};
pub use mode::{ArgumentMode, InstallMode, ParseModeError};
pub use module::{check_module, sniff_module, ModuleFormat, ModuleWarning};
pub use report::{
    describe_bytes, describe_shape, read_argument_text, render, OutputFormat, Rendered, Report,
};
