//! Serialization tests, run with `cargo test --features serde`.

#![cfg(feature = "serde")]

use ipvx::{AddressFamily, FamilyKind, parse};

#[test]
fn parsed_address_serializes_text_and_segments() {
    let addr = parse("10.0.0.255", FamilyKind::Ipv4).unwrap();
    let json = serde_json::to_value(&addr).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "text": "10.0.0.255", "segments": [10, 0, 0, 255] })
    );
}

#[test]
fn family_kind_uses_names() {
    assert_eq!(serde_json::to_string(&FamilyKind::Ipv6).unwrap(), "\"ipv6\"");
    let kind: FamilyKind = serde_json::from_str("\"IPv4\"").unwrap();
    assert_eq!(kind, FamilyKind::Ipv4);
    assert!(serde_json::from_str::<FamilyKind>("\"ipv5\"").is_err());
}

#[test]
fn family_round_trips() {
    let json = serde_json::to_string(&AddressFamily::IPV6).unwrap();
    let family: AddressFamily = serde_json::from_str(&json).unwrap();
    assert_eq!(family, AddressFamily::IPV6);
}

#[test]
fn invalid_family_rejected() {
    let json = r#"{
        "delimiter": ".",
        "numeric_base": 99,
        "segment_bit_width": 9,
        "field_count": 4,
        "max_segment": 255,
        "strict_field_count": true,
        "pad_blank_segments": false
    }"#;
    let err = serde_json::from_str::<AddressFamily>(json).unwrap_err();
    assert!(err.to_string().contains("numeric base 99"));
}
