//! Binary buffer utilities for DIDL payloads.
//!
//! # Overview
//!
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking;
//!   every read is bounds-checked and returns [`BufferError`] instead of panicking
//! - [`write_uleb128`] / [`Reader::uleb128`] - unsigned LEB128 varints
//!
//! # Example
//!
//! ```
//! use didl_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.buf(b"DIDL");
//! writer.uleb128(300);
//! writer.buf(&[0xaa]);
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.buf(4).unwrap(), b"DIDL");
//! assert_eq!(reader.uleb128().unwrap(), 300);
//! assert_eq!(reader.u8().unwrap(), 0xaa);
//! assert_eq!(reader.size(), 0);
//! ```

mod leb128;
mod print_octets;
mod reader;
mod writer;

pub use leb128::{uleb128_len, write_uleb128};
pub use print_octets::print_octets;
pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    #[error("end of buffer: needed {needed} byte(s) at offset {offset}, {remaining} remaining")]
    EndOfBuffer {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
    /// LEB128 value does not fit in 64 bits.
    #[error("LEB128 value at offset {0} overflows u64")]
    Leb128Overflow(usize),
}
