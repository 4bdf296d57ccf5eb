//! Encode/decode matrix for the hex crate.

use didl_hex::{from_hex, to_escaped_hex, to_hex, HexError};
use proptest::prelude::*;
use rand::Rng;

#[test]
fn known_vectors() {
    let cases: [(&[u8], &str); 4] = [
        (&[], ""),
        (&[0x00], "00"),
        (b"DIDL\x00\x00", "4449444c0000"),
        (&[0x0f, 0xf0, 0xab], "0ff0ab"),
    ];
    for (bytes, hex) in cases {
        assert_eq!(to_hex(bytes), hex);
        assert_eq!(from_hex(hex).unwrap(), bytes);
        assert_eq!(from_hex(&format!("0x{hex}")).unwrap(), bytes);
        assert_eq!(from_hex(&hex.to_uppercase()).unwrap(), bytes);
    }
}

#[test]
fn errors_are_positional_matrix() {
    let cases = [
        ("a", HexError::OddLength { len: 1 }),
        ("abc", HexError::OddLength { len: 3 }),
        ("0g", HexError::InvalidDigit { position: 0 }),
        ("00 0g", HexError::InvalidDigit { position: 2 }),
        ("000000-1", HexError::InvalidDigit { position: 6 }),
    ];
    for (input, expected) in cases {
        assert_eq!(from_hex(input), Err(expected), "input {input:?}");
    }
}

#[test]
fn random_buffers_roundtrip() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let len = rng.gen_range(0..64);
        let bytes: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let hex = to_hex(&bytes);
        assert_eq!(hex.len(), bytes.len() * 2);
        assert_eq!(from_hex(&hex).unwrap(), bytes);
        assert_eq!(to_escaped_hex(&bytes).len(), bytes.len() * 3);
    }
}

proptest! {
    #[test]
    fn hex_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let hex = to_hex(&bytes);
        prop_assert_eq!(hex.len(), 2 * bytes.len());
        prop_assert_eq!(from_hex(&hex).unwrap(), bytes);
    }
}
