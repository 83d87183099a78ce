//! Persistence port for the auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` talks to persisted state only through [`SessionStorage`],
//! so the browser `localStorage` adapter can be swapped for
//! [`MemoryStorage`] in tests or when the browser refuses storage access.
//!
//! LAYOUT
//! ======
//! One key (`protasker.session`) holding `{"token": ..., "user": {...}}`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::sync::Mutex;

use super::session::Session;

pub const SESSION_KEY: &str = "protasker.session";

/// Errors surfaced by a storage adapter. None of them are fatal to the app.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled, blocked, or absent (e.g. private mode, native build).
    #[error("persistent storage unavailable")]
    Unavailable,

    /// The storage backend rejected a read or write.
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("session encode failed: {0}")]
    Encode(String),

    /// A stored entry exists but is not a complete session.
    #[error("stored session invalid: {0}")]
    Decode(String),
}

/// Key-value persistence for a single session record.
pub trait SessionStorage: Send + Sync {
    /// Read the saved session, `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Decode`] for a corrupt entry, or another
    /// variant when the backend cannot be read.
    fn load(&self) -> Result<Option<Session>, StorageError>;

    /// Overwrite the saved session.
    ///
    /// # Errors
    ///
    /// Returns an error when the session cannot be encoded or written.
    fn save(&self, session: &Session) -> Result<(), StorageError>;

    /// Erase the saved session. Clearing an empty store succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot be written.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Serialize a session into its persisted JSON form.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if serialization fails.
pub fn encode_session(session: &Session) -> Result<String, StorageError> {
    serde_json::to_string(session).map_err(|e| StorageError::Encode(e.to_string()))
}

/// Parse a persisted entry, rejecting anything that is not a full session.
///
/// # Errors
///
/// Returns [`StorageError::Decode`] for malformed JSON, a missing user, or a
/// blank token, user id, or username.
pub fn decode_session(raw: &str) -> Result<Session, StorageError> {
    let session: Session = serde_json::from_str(raw).map_err(|e| StorageError::Decode(e.to_string()))?;
    if !session.is_complete() {
        return Err(StorageError::Decode("blank token or user".to_owned()));
    }
    Ok(session)
}

// =============================================================================
// BROWSER localStorage
// =============================================================================

/// Browser `localStorage` adapter. The `web_sys::Storage` handle is looked up
/// per call, so the adapter itself holds only the key.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new(SESSION_KEY)
    }
}

#[cfg(feature = "csr")]
fn browser_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "csr")]
fn backend_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(format!("{err:?}"))
}

impl SessionStorage for LocalStorage {
    fn load(&self) -> Result<Option<Session>, StorageError> {
        #[cfg(feature = "csr")]
        {
            let raw = browser_storage()?.get_item(&self.key).map_err(backend_error)?;
            raw.as_deref().map(decode_session).transpose()
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let raw = encode_session(session)?;
            browser_storage()?.set_item(&self.key, &raw).map_err(backend_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = session;
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            browser_storage()?.remove_item(&self.key).map_err(backend_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(StorageError::Unavailable)
        }
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// In-process storage holding the same serialized form as `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    raw: Mutex<Option<String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an arbitrary persisted entry.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { raw: Mutex::new(Some(raw.into())) }
    }

    /// Current persisted entry, if any.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.raw.lock().ok().and_then(|guard| guard.clone())
    }

    fn with_slot<T>(&self, f: impl FnOnce(&mut Option<String>) -> T) -> Result<T, StorageError> {
        let mut guard = self.raw.lock().map_err(|_| StorageError::Backend("memory storage poisoned".to_owned()))?;
        Ok(f(&mut guard))
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Session>, StorageError> {
        let raw = self.with_slot(|slot| slot.clone())?;
        raw.as_deref().map(decode_session).transpose()
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        let raw = encode_session(session)?;
        self.with_slot(|slot| *slot = Some(raw))
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.with_slot(|slot| *slot = None)
    }
}
