//! Tests for the Todo entity and identifier.

use std::collections::HashSet;
use std::str::FromStr;

use super::todo::TodoId;

#[test]
fn generated_id_is_24_hex_chars() {
    let id = TodoId::generate();
    let s = id.to_string();
    assert_eq!(s.len(), 24);
    assert!(s.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generated_ids_are_unique() {
    let ids: HashSet<TodoId> = (0..1000).map(|_| TodoId::generate()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn id_roundtrips_through_string() {
    let id = TodoId::generate();
    let parsed = TodoId::from_str(&id.to_string()).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn parse_accepts_uppercase_hex() {
    let id = TodoId::from_str("676D4A1B9F3C2E1A4B5C6D7E").unwrap();
    assert_eq!(id.to_string(), "676d4a1b9f3c2e1a4b5c6d7e");
}

#[test]
fn parse_rejects_wrong_length() {
    assert!(TodoId::from_str("abc123").is_err());
    assert!(TodoId::from_str("").is_err());
    // 25 chars
    assert!(TodoId::from_str("676d4a1b9f3c2e1a4b5c6d7e0").is_err());
}

#[test]
fn parse_rejects_non_hex() {
    assert!(TodoId::from_str("zzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    assert!(TodoId::from_str("676d4a1b9f3c2e1a4b5c6d7-").is_err());
}

#[test]
fn timestamp_prefix_is_recent() {
    let id = TodoId::generate();
    let seconds = u32::from_be_bytes([
        id.as_bytes()[0],
        id.as_bytes()[1],
        id.as_bytes()[2],
        id.as_bytes()[3],
    ]);
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs() as u32;
    assert!(now.abs_diff(seconds) < 60);
}
