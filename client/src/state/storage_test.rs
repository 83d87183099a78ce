use super::*;
use crate::net::types::User;

fn alice_session() -> Session {
    Session {
        token: "abc123".to_owned(),
        user: User {
            id: "1".to_owned(),
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            role: None,
        },
    }
}

// =============================================================
// Persisted layout
// =============================================================

#[test]
fn encode_session_writes_token_and_user_pair() {
    let raw = encode_session(&alice_session()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "token": "abc123",
            "user": { "id": "1", "username": "alice", "email": "alice@example.com" }
        })
    );
}

#[test]
fn decode_session_rejects_malformed_json() {
    assert!(matches!(decode_session("not json"), Err(StorageError::Decode(_))));
}

#[test]
fn decode_session_rejects_token_without_user() {
    assert!(matches!(decode_session(r#"{"token":"abc123"}"#), Err(StorageError::Decode(_))));
}

#[test]
fn decode_session_rejects_user_without_token() {
    let raw = r#"{"user":{"id":"1","username":"alice","email":"a@example.com"}}"#;
    assert!(matches!(decode_session(raw), Err(StorageError::Decode(_))));
}

#[test]
fn decode_session_rejects_blank_token() {
    let raw = r#"{"token":"  ","user":{"id":"1","username":"alice","email":"a@example.com"}}"#;
    assert_eq!(decode_session(raw), Err(StorageError::Decode("blank token or user".to_owned())));
}

#[test]
fn decode_session_rejects_blank_username() {
    let raw = r#"{"token":"abc123","user":{"id":"1","username":"","email":"a@example.com"}}"#;
    assert!(matches!(decode_session(raw), Err(StorageError::Decode(_))));
}

#[test]
fn decode_session_accepts_backend_user_shape() {
    let raw = r#"{"token":"abc123","user":{"_id":"1","username":"alice","email":"a@example.com","role":"admin"}}"#;
    let session = decode_session(raw).unwrap();
    assert_eq!(session.user.id, "1");
    assert_eq!(session.user.role.as_deref(), Some("admin"));
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.load(), Ok(None));
    assert_eq!(storage.raw(), None);
}

#[test]
fn memory_storage_save_then_load() {
    let storage = MemoryStorage::new();
    storage.save(&alice_session()).unwrap();
    assert_eq!(storage.load(), Ok(Some(alice_session())));
}

#[test]
fn memory_storage_clear_is_idempotent() {
    let storage = MemoryStorage::new();
    storage.save(&alice_session()).unwrap();
    assert_eq!(storage.clear(), Ok(()));
    assert_eq!(storage.clear(), Ok(()));
    assert_eq!(storage.load(), Ok(None));
}

#[test]
fn memory_storage_surfaces_corrupt_entry() {
    let storage = MemoryStorage::with_raw("{\"token\":");
    assert!(matches!(storage.load(), Err(StorageError::Decode(_))));
}

// =============================================================
// LocalStorage outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_unavailable_in_native_builds() {
    let storage = LocalStorage::default();
    assert_eq!(storage.key(), SESSION_KEY);
    assert_eq!(storage.load(), Err(StorageError::Unavailable));
    assert_eq!(storage.save(&alice_session()), Err(StorageError::Unavailable));
    assert_eq!(storage.clear(), Err(StorageError::Unavailable));
}
