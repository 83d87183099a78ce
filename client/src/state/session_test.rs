use std::sync::Arc;

use leptos::reactive::owner::Owner;

use super::*;
use crate::state::storage::{MemoryStorage, encode_session};

// =============================================================
// Helpers
// =============================================================

fn alice() -> User {
    User {
        id: "1".to_owned(),
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: None,
    }
}

fn saved_alice() -> String {
    encode_session(&Session { token: "abc123".to_owned(), user: alice() }).unwrap()
}

/// Run `f` with a fresh store inside a reactive owner.
fn with_store<T>(storage: Arc<MemoryStorage>, f: impl FnOnce(SessionStore) -> T) -> T {
    let owner = Owner::new();
    owner.with(|| f(SessionStore::new(storage)))
}

/// Storage that refuses every operation, like a browser with storage disabled.
struct DisabledStorage;

impl SessionStorage for DisabledStorage {
    fn load(&self) -> Result<Option<Session>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn save(&self, _session: &Session) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }

    fn clear(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

fn assert_no_partial_state(store: SessionStore) {
    let session = store.snapshot();
    assert_eq!(store.token().is_some(), session.as_ref().map(|s| &s.user).is_some());
}

// =============================================================
// Session::new
// =============================================================

#[test]
fn session_new_rejects_blank_token() {
    assert_eq!(Session::new("   ", alice()), None);
    assert!(Session::new("abc123", alice()).is_some());
}

#[test]
fn session_new_rejects_anonymous_user() {
    let no_id = User { id: String::new(), ..alice() };
    let no_name = User { username: "  ".to_owned(), ..alice() };
    assert_eq!(Session::new("abc123", no_id), None);
    assert_eq!(Session::new("abc123", no_name), None);
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_with_nothing_saved_leaves_store_empty() {
    with_store(Arc::new(MemoryStorage::new()), |store| {
        assert!(!store.restore());
        assert_eq!(store.snapshot(), None);
    });
}

#[test]
fn restore_picks_up_saved_session() {
    with_store(Arc::new(MemoryStorage::with_raw(saved_alice())), |store| {
        assert!(store.restore());
        assert_eq!(store.token().as_deref(), Some("abc123"));
        assert_eq!(store.snapshot().map(|s| s.user), Some(alice()));
    });
}

#[test]
fn restore_discards_corrupt_entry() {
    let storage = Arc::new(MemoryStorage::with_raw(r#"{"token":"abc123"}"#));
    with_store(storage.clone(), |store| {
        assert!(!store.restore());
        assert_eq!(store.snapshot(), None);
    });
    assert_eq!(storage.raw(), None);
}

#[test]
fn restore_degrades_when_storage_disabled() {
    Owner::new().with(|| {
        let store = SessionStore::new(Arc::new(DisabledStorage));
        assert!(!store.restore());
        assert_eq!(store.snapshot(), None);
    });
}

#[test]
fn restore_then_logout_is_always_empty() {
    for raw in [Some(saved_alice()), Some("garbage".to_owned()), None] {
        let storage = Arc::new(raw.map_or_else(MemoryStorage::new, MemoryStorage::with_raw));
        with_store(storage.clone(), |store| {
            store.restore();
            store.logout();
            assert_eq!(store.snapshot(), None);
        });
        assert_eq!(storage.raw(), None);
    }
}

// =============================================================
// login / logout
// =============================================================

#[test]
fn login_holds_token_and_user_and_persists_them() {
    let storage = Arc::new(MemoryStorage::new());
    with_store(storage.clone(), |store| {
        store.login("abc123", alice());
        assert_eq!(store.token().as_deref(), Some("abc123"));
        assert_eq!(store.user(), Some(alice()));
        assert!(store.is_authenticated());
        assert_no_partial_state(store);
    });
    assert_eq!(storage.raw(), Some(saved_alice()));
}

#[test]
fn login_with_blank_token_is_ignored() {
    let storage = Arc::new(MemoryStorage::new());
    with_store(storage.clone(), |store| {
        store.login("", alice());
        assert_eq!(store.snapshot(), None);
        assert_no_partial_state(store);
    });
    assert_eq!(storage.raw(), None);
}

#[test]
fn login_with_blank_username_is_ignored() {
    let storage = Arc::new(MemoryStorage::new());
    with_store(storage.clone(), |store| {
        store.login("abc123", User { username: String::new(), ..alice() });
        assert!(!store.is_authenticated());
        assert_no_partial_state(store);
    });
    assert_eq!(storage.raw(), None);
}

#[test]
fn login_is_memory_only_when_storage_disabled() {
    Owner::new().with(|| {
        let store = SessionStore::new(Arc::new(DisabledStorage));
        store.login("abc123", alice());
        assert!(store.is_authenticated());
        store.logout();
        assert!(!store.is_authenticated());
    });
}

#[test]
fn logout_clears_memory_and_storage() {
    let storage = Arc::new(MemoryStorage::new());
    with_store(storage.clone(), |store| {
        store.login("abc123", alice());
        store.logout();
        assert_eq!(store.snapshot(), None);
        assert_eq!(store.token(), None);
        assert_eq!(store.user(), None);
        assert_no_partial_state(store);
    });
    assert_eq!(storage.raw(), None);
}

#[test]
fn logout_twice_is_a_noop_the_second_time() {
    with_store(Arc::new(MemoryStorage::new()), |store| {
        store.login("abc123", alice());
        store.logout();
        assert_eq!(store.snapshot(), None);
        store.logout();
        assert_eq!(store.snapshot(), None);
    });
}

#[test]
fn derived_readers_see_mutations_immediately() {
    with_store(Arc::new(MemoryStorage::new()), |store| {
        let authed = Signal::derive(move || store.is_authenticated());
        assert!(!authed.get_untracked());
        store.login("abc123", alice());
        assert!(authed.get_untracked());
        store.logout();
        assert!(!authed.get_untracked());
    });
}

#[test]
fn copies_of_the_store_share_state() {
    with_store(Arc::new(MemoryStorage::new()), |store| {
        let header_view = store;
        store.login("abc123", alice());
        assert_eq!(header_view.user().map(|u| u.username), Some("alice".to_owned()));
    });
}
