// crates/multisz-core/tests/wide_text.rs

use multisz_core::{decode_wide, decode_wide_lossy, encode_wide};

#[test]
fn build_then_parse_returns_the_original_strings() {
    let strings = ["Hello", "World", "Ciao", "Hi", "Connie"];
    let flat = encode_wide(&strings).expect("encode ok");
    let back = decode_wide(&flat).expect("decode ok");
    assert_eq!(back, strings);
}

#[test]
fn non_ascii_text_roundtrips() {
    let strings = ["Città", "日本語", "🦀 crab"];
    let flat = encode_wide(&strings).expect("encode ok");
    assert_eq!(decode_wide(&flat).expect("decode ok"), strings);
}

#[test]
fn surrogate_pair_survives_the_flattened_form() {
    // U+1F980 encodes as two units; neither is NUL, so the pair is opaque
    // to the layout.
    let strings = ["🦀"];
    let flat = encode_wide(&strings).expect("encode ok");

    // two units for the pair, its NUL, the closing NUL
    assert_eq!(flat.len(), 4);
    assert_eq!(decode_wide(&flat).expect("decode ok"), strings);
}

#[test]
fn empty_string_list_flattens_to_two_nuls() {
    let strings: Vec<&str> = vec![];
    let flat = encode_wide(&strings).expect("encode ok");

    assert_eq!(flat, vec![0u16, 0]);
    assert!(decode_wide(&flat).expect("decode ok").is_empty());
}

#[test]
fn empty_string_is_rejected() {
    let err = encode_wide(&["ok", ""]).unwrap_err();
    let msg = format!("{err:?}");
    assert!(msg.contains("empty element at index 1"), "got: {msg}");
}

#[test]
fn lone_surrogate_fails_strict_decode_but_not_lossy() {
    // One element holding a lone high surrogate: well-formed as a buffer,
    // invalid as UTF-16 text.
    let flat = vec![0xD800u16, 0, 0];

    let err = decode_wide(&flat).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("utf-16"), "got: {msg}");

    let back = decode_wide_lossy(&flat).expect("lossy decode ok");
    assert_eq!(back, vec!["\u{FFFD}".to_string()]);
}
