//! Byte-exact argument encodings and blob normalization.

use didl_args::{
    build_argument, encode_empty, encode_optional_principal, encode_optional_principal_text,
    encode_principal, inspect_argument, parse_blob, ArgumentError, ArgumentMode, ArgumentShape,
    TextualPrincipalCodec, MAGIC,
};
use didl_hex::{from_hex, to_escaped_hex, to_hex};
use didl_principal::{Principal, MAX_LENGTH_IN_BYTES};
use proptest::prelude::*;
use rand::Rng;

const CODEC: TextualPrincipalCodec = TextualPrincipalCodec;

#[test]
fn empty_argument_constant() {
    assert_eq!(encode_empty(), vec![0x44, 0x49, 0x44, 0x4c, 0x00, 0x00]);
    assert_eq!(
        build_argument(ArgumentMode::None, "", &CODEC).unwrap(),
        encode_empty()
    );
}

#[test]
fn absence_equivalence() {
    let blank = encode_optional_principal_text("", &CODEC).unwrap();
    let spaces = encode_optional_principal_text("   ", &CODEC).unwrap();
    let null = encode_optional_principal_text("null", &CODEC).unwrap();
    assert_eq!(blank.len(), 11);
    assert_eq!(blank, spaces);
    assert_eq!(blank, null);
    assert_eq!(blank, encode_optional_principal(None).unwrap());
}

#[test]
fn optional_principal_present_field_by_field() {
    let bytes = encode_optional_principal(Some(&[0x01, 0x02][..])).unwrap();
    let expected = [
        0x44, 0x49, 0x44, 0x4c, // magic
        0x01, // one type table entry
        0x6e, 0x68, // opt principal
        0x01, // one argument
        0x00, // of type table index 0
        0x01, // present
        0x02, // length
        0x01, 0x02, // identifier
    ];
    assert_eq!(bytes.len(), expected.len());
    for (i, (got, want)) in bytes.iter().zip(expected.iter()).enumerate() {
        assert_eq!(got, want, "byte {i}");
    }
}

#[test]
fn quoted_blob_scenario() {
    assert_eq!(
        parse_blob(r#"blob "DIDL\00\01h\02""#).unwrap(),
        vec![0x44, 0x49, 0x44, 0x4c, 0x00, 0x01, 0x68, 0x02]
    );
}

#[test]
fn headerless_blob_scenario() {
    assert_eq!(
        parse_blob(r"\00\01h").unwrap(),
        vec![0x44, 0x49, 0x44, 0x4c, 0x00, 0x01, 0x68]
    );
}

#[test]
fn blob_shapes_from_tooling_agree() {
    let expected = encode_principal(&[0x04]).unwrap();
    let shapes = [
        r#"blob "DIDL\00\01h\01\04""#,
        r"DIDL\00\01h\01\04",
        r"\44\49\44\4c\00\01\68\01\04",
        r"\00\01\68\01\04",
        r"'\00\01h\01\04'",
    ];
    for shape in shapes {
        assert_eq!(parse_blob(shape).unwrap(), expected, "{shape}");
    }
}

#[test]
fn odd_length_hex_is_rejected() {
    assert!(matches!(
        build_argument(ArgumentMode::Hex, "abc", &CODEC),
        Err(ArgumentError::Hex(_))
    ));
}

#[test]
fn principal_too_long_for_prefix() {
    assert_eq!(
        encode_principal(&[7u8; 128]),
        Err(ArgumentError::IdentifierTooLong { len: 128, max: 127 })
    );
    assert_eq!(
        encode_optional_principal(Some(&[7u8; 128][..])),
        Err(ArgumentError::IdentifierTooLong { len: 128, max: 127 })
    );
}

#[test]
fn every_mode_yields_readable_argument() {
    let cases = [
        (ArgumentMode::None, "", ArgumentShape::Empty),
        (
            ArgumentMode::Principal,
            "ryjl3-tyaaa-aaaaa-aaaba-cai",
            ArgumentShape::Principal(vec![0, 0, 0, 0, 0, 0, 0, 2, 1, 1]),
        ),
        (
            ArgumentMode::OptionalPrincipal,
            "NULL",
            ArgumentShape::OptionalPrincipal(None),
        ),
        (
            ArgumentMode::OptionalPrincipal,
            "aaaaa-aa",
            ArgumentShape::OptionalPrincipal(Some(vec![])),
        ),
        (
            ArgumentMode::DidlBlob,
            r"blob '\00\01h\01\04'",
            ArgumentShape::Principal(vec![0x04]),
        ),
        (
            ArgumentMode::Hex,
            "0x4449444C0000",
            ArgumentShape::Empty,
        ),
    ];
    for (mode, text, shape) in cases {
        let bytes = build_argument(mode, text, &CODEC).unwrap();
        assert!(bytes.starts_with(&MAGIC), "{mode}");
        assert_eq!(inspect_argument(&bytes).unwrap(), shape, "{mode} {text:?}");
    }
}

#[test]
fn random_principals_through_every_text_mode() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let len = rng.gen_range(0..=MAX_LENGTH_IN_BYTES);
        let id: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let text = Principal::from_slice(&id).unwrap().to_text();

        let plain = build_argument(ArgumentMode::Principal, &text, &CODEC).unwrap();
        assert_eq!(plain, encode_principal(&id).unwrap(), "{text}");
        assert_eq!(
            inspect_argument(&plain).unwrap(),
            ArgumentShape::Principal(id.clone())
        );

        let optional = build_argument(ArgumentMode::OptionalPrincipal, &text, &CODEC).unwrap();
        assert_eq!(
            inspect_argument(&optional).unwrap(),
            ArgumentShape::OptionalPrincipal(Some(id.clone()))
        );

        // Escaped output without the header reads back through blob mode.
        let blob = format!("blob \"{}\"", to_escaped_hex(&optional[MAGIC.len()..]));
        assert_eq!(
            build_argument(ArgumentMode::DidlBlob, &blob, &CODEC).unwrap(),
            optional
        );
    }
}

proptest! {
    #[test]
    fn principal_length_invariant(id in proptest::collection::vec(any::<u8>(), 0..=127)) {
        let bytes = encode_principal(&id).unwrap();
        prop_assert_eq!(bytes.len(), 8 + id.len());
        prop_assert_eq!(bytes[7] as usize, id.len());
        prop_assert_eq!(inspect_argument(&bytes).unwrap(), ArgumentShape::Principal(id));
    }

    #[test]
    fn optional_principal_roundtrip(id in proptest::collection::vec(any::<u8>(), 0..=127)) {
        let bytes = encode_optional_principal(Some(id.as_slice())).unwrap();
        prop_assert_eq!(bytes.len(), 11 + id.len());
        prop_assert_eq!(
            inspect_argument(&bytes).unwrap(),
            ArgumentShape::OptionalPrincipal(Some(id))
        );
    }

    #[test]
    fn header_is_never_duplicated(body in proptest::collection::vec(any::<u8>(), 0..64)) {
        let mut message = MAGIC.to_vec();
        message.extend_from_slice(&body);
        let escaped = to_escaped_hex(&message);
        prop_assert_eq!(parse_blob(&escaped).unwrap(), message.clone());
        let quoted = format!("blob \"{escaped}\"");
        prop_assert_eq!(parse_blob(&quoted).unwrap(), message);
    }

    #[test]
    fn escaped_body_gains_header(body in proptest::collection::vec(any::<u8>(), 1..64)) {
        prop_assume!(!body.starts_with(&MAGIC));
        let parsed = parse_blob(&to_escaped_hex(&body)).unwrap();
        prop_assert_eq!(&parsed[..4], &MAGIC[..]);
        prop_assert_eq!(&parsed[4..], &body[..]);
    }

    #[test]
    fn hex_mode_is_identity(bytes in proptest::collection::vec(any::<u8>(), 1..64)) {
        let built = build_argument(ArgumentMode::Hex, &to_hex(&bytes), &CODEC).unwrap();
        prop_assert_eq!(&built, &bytes);
        prop_assert_eq!(from_hex(&to_hex(&bytes)).unwrap(), bytes);
    }
}
