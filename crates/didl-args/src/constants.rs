/// Magic header that starts every DIDL message.
pub const MAGIC: [u8; 4] = *b"DIDL";

/// Primitive type code of `principal` (`-24` as SLEB128).
pub const TYPE_PRINCIPAL: u8 = 0x68;

/// Compound type code of `opt` (`-18` as SLEB128).
pub const TYPE_OPT: u8 = 0x6e;

/// Largest length a single-byte LEB128 prefix can carry.
pub const MAX_IDENTIFIER_LEN: usize = 0x7f;

/// `\0asm`, the start of every uncompressed WebAssembly module.
pub const WASM_MAGIC: [u8; 4] = [0x00, 0x61, 0x73, 0x6d];

/// Start of a gzip stream.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
