//! Binary buffer reader with cursor tracking.

use crate::BufferError;

/// A binary buffer reader that reads data from a byte slice.
///
/// The reader maintains a cursor position. Every read checks the remaining
/// length first, so truncated input surfaces as [`BufferError::EndOfBuffer`].
///
/// # Example
///
/// ```
/// use didl_buffers::Reader;
///
/// let data = [0x01, 0x02];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert!(reader.buf(2).is_err());
/// assert_eq!(reader.u8().unwrap(), 0x02);
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    fn ensure(&self, needed: usize) -> Result<(), BufferError> {
        let remaining = self.size();
        if needed > remaining {
            return Err(BufferError::EndOfBuffer {
                offset: self.x,
                needed,
                remaining,
            });
        }
        Ok(())
    }

    /// Returns a subarray of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.ensure(size)?;
        let start = self.x;
        self.x += size;
        Ok(&self.uint8[start..self.x])
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.ensure(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads an unsigned LEB128 varint.
    pub fn uleb128(&mut self) -> Result<u64, BufferError> {
        let start = self.x;
        let mut value: u64 = 0;
        let mut shift = 0u32;
        loop {
            let byte = self.u8()?;
            let low = u64::from(byte & 0x7f);
            if shift >= 64 || (shift == 63 && low > 1) {
                return Err(BufferError::Leb128Overflow(start));
            }
            value |= low << shift;
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            shift += 7;
        }
    }

    /// Reads a signed LEB128 varint.
    ///
    /// DIDL type references are signed: negative values name primitive types,
    /// non-negative values index the type table.
    pub fn sleb128(&mut self) -> Result<i64, BufferError> {
        let start = self.x;
        let mut value: i64 = 0;
        let mut shift = 0u32;
        loop {
            let byte = self.u8()?;
            if shift >= 64 {
                return Err(BufferError::Leb128Overflow(start));
            }
            value |= i64::from(byte & 0x7f) << shift;
            shift += 7;
            if byte & 0x80 == 0 {
                if shift < 64 && byte & 0x40 != 0 {
                    value |= -1i64 << shift;
                }
                return Ok(value);
            }
        }
    }
}
