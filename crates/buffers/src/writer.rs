//! Auto-growing binary buffer writer.

use crate::leb128::write_uleb128;

/// A binary buffer writer that appends to an internal growable buffer.
///
/// `flush` hands out everything written since the last flush and leaves the
/// writer empty, so one writer can produce several payloads.
///
/// # Example
///
/// ```
/// use didl_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x44);
/// writer.buf(&[0x49, 0x44, 0x4c]);
/// assert_eq!(writer.flush(), b"DIDL");
/// assert!(writer.flush().is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct Writer {
    /// Bytes written so far.
    pub uint8: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { uint8: Vec::new() }
    }

    /// Creates an empty writer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            uint8: Vec::with_capacity(capacity),
        }
    }

    /// Takes the written bytes out of the writer.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.uint8)
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, byte: u8) {
        self.uint8.push(byte);
    }

    /// Writes raw bytes verbatim.
    #[inline]
    pub fn buf(&mut self, bytes: &[u8]) {
        self.uint8.extend_from_slice(bytes);
    }

    /// Writes an unsigned LEB128 varint.
    pub fn uleb128(&mut self, value: u64) {
        write_uleb128(&mut self.uint8, value);
    }
}
