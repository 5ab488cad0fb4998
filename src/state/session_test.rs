use super::*;
use crate::net::types::Role;

fn sample_user() -> User {
    User {
        id: 7,
        name: "Budi Santoso".to_owned(),
        email: "budi@kampus.ac.id".to_owned(),
        role: Role::Mahasiswa,
    }
}

// =============================================================
// Record format round-trip
// =============================================================

#[test]
fn encode_then_decode_round_trips_structurally() {
    let user = sample_user();
    let raw = encode(&user, "tok-abc123").expect("session encodes");
    let (restored_user, restored_token) = decode(&raw).expect("session decodes");
    assert_eq!(restored_user, user);
    assert_eq!(restored_token, "tok-abc123");
}

#[test]
fn decode_accepts_the_wire_field_layout() {
    let raw = r#"{"user":{"id":7,"name":"Budi Santoso","email":"budi@kampus.ac.id","role":"MAHASISWA"},"token":"tok"}"#;
    let (user, token) = decode(raw).expect("well-formed record decodes");
    assert_eq!(user.id, 7);
    assert_eq!(user.role, Role::Mahasiswa);
    assert_eq!(token, "tok");
}

// =============================================================
// Malformed records are swallowed
// =============================================================

#[test]
fn decode_rejects_non_json() {
    assert!(decode("definitely not json").is_none());
    assert!(decode("").is_none());
}

#[test]
fn decode_rejects_missing_token() {
    // Both-or-neither: a record with only a user is treated as no session.
    let raw = r#"{"user":{"id":7,"name":"B","email":"b@k.id","role":"MAHASISWA"}}"#;
    assert!(decode(raw).is_none());
}

#[test]
fn decode_rejects_missing_user() {
    let raw = r#"{"token":"tok"}"#;
    assert!(decode(raw).is_none());
}

#[test]
fn decode_rejects_malformed_user() {
    let raw = r#"{"user":{"id":"not-a-number"},"token":"tok"}"#;
    assert!(decode(raw).is_none());
}

#[test]
fn decode_rejects_unknown_role() {
    let raw = r#"{"user":{"id":7,"name":"B","email":"b@k.id","role":"ADMIN"},"token":"tok"}"#;
    assert!(decode(raw).is_none());
}

// =============================================================
// restore() never fails
// =============================================================

#[test]
fn restore_without_storage_yields_the_empty_session() {
    // On the native target there is no backing storage at all; restore
    // must still return a fully-empty, non-loading session.
    let state = restore();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.loading);
}
