//! Unsigned LEB128 varints, the integer encoding DIDL uses for counts and lengths.

/// Appends `value` to `out` as unsigned LEB128.
///
/// ```
/// use didl_buffers::write_uleb128;
///
/// let mut out = Vec::new();
/// write_uleb128(&mut out, 624_485);
/// assert_eq!(out, vec![0xe5, 0x8e, 0x26]);
/// ```
pub fn write_uleb128(out: &mut Vec<u8>, mut value: u64) {
    loop {
        let byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        out.push(byte | 0x80);
    }
}

/// Number of bytes `value` occupies when LEB128 encoded.
pub fn uleb128_len(mut value: u64) -> usize {
    let mut len = 1;
    while value >= 0x80 {
        value >>= 7;
        len += 1;
    }
    len
}
