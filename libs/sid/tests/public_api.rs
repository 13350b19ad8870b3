//! Tests against the public surface of the crate.

use proptest::prelude::*;
use sid::{define_short_id, Options, ShortId, SidError, Suuid, Uuid};

define_short_id!(InvoiceId, "inv");

fn is_url_safe(id: &str) -> bool {
    id.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[test]
fn test_known_uuid_roundtrip() {
    let uuid = "550e8400-e29b-41d4-a716-446655440000";
    let encoded = sid::encode(uuid).unwrap();
    assert_eq!(encoded, "2aUyqjCzEIiEcYMKj7TZtw");
    assert_eq!(sid::decode(&encoded).unwrap(), uuid);
}

#[test]
fn test_nil_and_max_uuids() {
    let zero = sid::encode("00000000-0000-0000-0000-000000000000").unwrap();
    let max = sid::encode("ffffffff-ffff-ffff-ffff-ffffffffffff").unwrap();
    assert_eq!(zero, "0");
    assert!(max.len() <= 22);
    assert_ne!(zero, max);
}

#[test]
fn test_decode_rejects_outside_alphabet() {
    for bad in ["abc+", "a/b", "pad==", "with space"] {
        assert!(sid::decode(bad).unwrap_err().is_alphabet_error(), "{bad}");
    }
}

#[test]
fn test_sid_matches_prefixed_pattern() {
    let id = sid::sid(Some("usr"), Options::default()).unwrap();
    let body = id.strip_prefix("usr:").expect("prefix and separator");
    assert!(!body.is_empty());
    assert!(is_url_safe(body));
}

#[test]
fn test_sid_without_options() {
    let id = sid::sid(None, Options::default()).unwrap();
    assert!(is_url_safe(&id));
    assert_eq!(id.len(), 19);
}

#[test]
fn test_typed_id_parses_generic_short_id() {
    let raw = sid::sid(Some("inv"), Options::default().with_timestamp(42)).unwrap();
    let typed: InvoiceId = raw.parse().unwrap();
    assert_eq!(typed.timestamp_ms(), 42);
    assert_eq!(typed.to_string(), raw);

    let generic: ShortId = raw.parse().unwrap();
    assert_eq!(typed.short_id(), &generic);
}

#[test]
fn test_typed_id_rejects_other_prefix() {
    let raw = sid::sid(Some("usr"), Options::default()).unwrap();
    let err = raw.parse::<InvoiceId>().unwrap_err();
    assert!(err.is_prefix_error());
}

#[test]
fn test_suuid_json_roundtrip() {
    let id = Suuid::new_v4();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
    let parsed: Suuid = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn test_suuid_json_rejects_bad_string() {
    let result: Result<Suuid, _> = serde_json::from_str("\"not-base62\"");
    assert!(result.is_err());
}

#[test]
fn test_suuid_orders_by_uuid_value() {
    let a = Suuid::from_uuid(Uuid::from_u128(1 << 100));
    let b = Suuid::from_uuid(Uuid::from_u128(1 << 101));
    assert!(a < b);
    assert!(a.to_string().len() <= b.to_string().len());
}

#[test]
fn test_malformed_uuid_is_reported() {
    let err = sid::encode("not-a-uuid").unwrap_err();
    assert!(matches!(err, SidError::MalformedUuid { .. }));
}

proptest! {
    #[test]
    fn prop_short_id_exposes_timestamp(ts in any::<u64>(), len in 0usize..32) {
        let options = Options::default().with_timestamp(ts).with_length(len);
        let id = sid::sid(Some("p"), options).unwrap();
        let parsed = ShortId::parse(&id).unwrap();
        prop_assert_eq!(parsed.timestamp_ms(), ts);
        prop_assert_eq!(parsed.random().len(), len);
        prop_assert!(!id.contains(['+', '/', '=']));
    }
}
