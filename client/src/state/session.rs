//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds exactly one [`SessionStore`] at boot and hands it to the route
//! guard, the header chrome, the auth pages, and the API client as a prop.
//! Nothing looks the session up implicitly.
//!
//! INVARIANTS
//! ==========
//! - The current value is `Option<Session>`: token and user are set and
//!   cleared together, so a partial session cannot be observed.
//! - Mutations are single synchronous signal writes; every reader sees the
//!   new value in the same pass.
//! - Persistence failures are logged and otherwise ignored. The in-memory
//!   session stays authoritative for the page lifetime.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::storage::{SessionStorage, StorageError};
use crate::net::types::User;

/// Server-issued bearer token plus the identity it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

impl Session {
    /// Build a session, refusing a blank token or an anonymous user.
    #[must_use]
    pub fn new(token: impl Into<String>, user: User) -> Option<Self> {
        let session = Self { token: token.into(), user };
        session.is_complete().then_some(session)
    }

    /// Token, user id, and username are all non-blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.token.trim().is_empty() && !self.user.id.trim().is_empty() && !self.user.username.trim().is_empty()
    }
}

/// Reactive owner of the current session and its persistence port.
#[derive(Clone, Copy)]
pub struct SessionStore {
    current: RwSignal<Option<Session>>,
    storage: StoredValue<Arc<dyn SessionStorage>>,
}

impl SessionStore {
    /// Create an empty store backed by `storage`. Call [`SessionStore::restore`]
    /// once at boot to pick up a saved session.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { current: RwSignal::new(None), storage: StoredValue::new(storage) }
    }

    /// Load a previously saved session. Returns whether one was restored.
    ///
    /// The token is trusted as-is; the backend rejects it on first use if it
    /// has been revoked. A corrupt entry is erased.
    pub fn restore(&self) -> bool {
        let loaded = self.storage.with_value(|s| s.load());
        match loaded {
            Ok(Some(session)) => {
                log::debug!("restored session for {}", session.user.username);
                self.current.set(Some(session));
                true
            }
            Ok(None) => false,
            Err(StorageError::Decode(reason)) => {
                log::warn!("discarding stored session: {reason}");
                self.erase_persisted();
                false
            }
            Err(e) => {
                log::warn!("session storage unavailable, continuing without a saved session: {e}");
                false
            }
        }
    }

    /// Record a successful backend login. A blank token, user id, or
    /// username is ignored.
    pub fn login(&self, token: impl Into<String>, user: User) {
        let Some(session) = Session::new(token, user) else {
            log::warn!("ignoring login with a blank token or user");
            return;
        };
        let saved = self.storage.with_value(|s| s.save(&session));
        if let Err(e) = saved {
            log::warn!("session not persisted, keeping it in memory only: {e}");
        }
        self.current.set(Some(session));
    }

    /// Drop the session and its persisted copy. Calling it on an empty store
    /// does not notify observers.
    pub fn logout(&self) {
        self.erase_persisted();
        if self.current.with_untracked(Option::is_some) {
            self.current.set(None);
        }
    }

    /// Tracked read of the whole session.
    pub fn session(&self) -> Option<Session> {
        self.current.get()
    }

    /// Untracked read of the whole session, for event handlers and tests.
    pub fn snapshot(&self) -> Option<Session> {
        self.current.get_untracked()
    }

    /// Tracked presence check used by the route guard and header chrome.
    pub fn is_authenticated(&self) -> bool {
        self.current.with(Option::is_some)
    }

    /// Tracked read of the current user.
    pub fn user(&self) -> Option<User> {
        self.current.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    /// Untracked bearer token for outgoing requests.
    pub fn token(&self) -> Option<String> {
        self.current.with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
    }

    fn erase_persisted(&self) {
        match self.storage.with_value(|s| s.clear()) {
            Ok(()) | Err(StorageError::Unavailable) => {}
            Err(e) => log::warn!("stored session not erased: {e}"),
        }
    }
}
