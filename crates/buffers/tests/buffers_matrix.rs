//! Writer/Reader roundtrip matrix for the buffers crate.

use didl_buffers::{uleb128_len, BufferError, Reader, Writer};
use proptest::prelude::*;

#[test]
fn roundtrip_mixed_payload() {
    let mut w = Writer::new();
    w.buf(b"DIDL");
    w.u8(0x01);
    w.buf(&[0x6e, 0x68]);
    w.uleb128(1);
    let data = w.flush();
    assert_eq!(data, vec![0x44, 0x49, 0x44, 0x4c, 0x01, 0x6e, 0x68, 0x01]);

    let mut r = Reader::new(&data);
    assert_eq!(r.buf(4).unwrap(), b"DIDL");
    assert_eq!(r.uleb128().unwrap(), 1);
    assert_eq!(r.sleb128().unwrap(), -18);
    assert_eq!(r.sleb128().unwrap(), -24);
    assert_eq!(r.uleb128().unwrap(), 1);
    assert_eq!(r.size(), 0);
}

#[test]
fn uleb128_boundary_matrix() {
    let cases: [(u64, &[u8]); 5] = [
        (0, &[0x00]),
        (127, &[0x7f]),
        (128, &[0x80, 0x01]),
        (16_383, &[0xff, 0x7f]),
        (16_384, &[0x80, 0x80, 0x01]),
    ];
    for (value, expected) in cases {
        let mut w = Writer::new();
        w.uleb128(value);
        assert_eq!(w.flush(), expected, "encode {value}");
        let mut r = Reader::new(expected);
        assert_eq!(r.uleb128().unwrap(), value, "decode {value}");
    }
}

#[test]
fn reader_reports_offset_on_truncation() {
    let data = [0x44, 0x49];
    let mut r = Reader::new(&data);
    r.u8().unwrap();
    assert_eq!(
        r.buf(4),
        Err(BufferError::EndOfBuffer {
            offset: 1,
            needed: 4,
            remaining: 1
        })
    );
}

proptest! {
    #[test]
    fn uleb128_roundtrip(value in any::<u64>()) {
        let mut w = Writer::new();
        w.uleb128(value);
        let data = w.flush();
        prop_assert_eq!(data.len(), uleb128_len(value));
        let mut r = Reader::new(&data);
        prop_assert_eq!(r.uleb128().unwrap(), value);
        prop_assert_eq!(r.size(), 0);
    }
}
