//! Route guard decision.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply one rule: no session means a history-replacing
//! redirect to `/login`. `components::require_auth` re-evaluates it on every
//! navigation and whenever the session changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::AppRoute;

pub const LOGIN_PATH: &str = "/login";

/// A requested navigation, with its auth requirement taken from the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigation<'a> {
    pub target: &'a str,
    pub requires_auth: bool,
}

impl<'a> Navigation<'a> {
    #[must_use]
    pub fn to(target: &'a str) -> Self {
        Self { target, requires_auth: AppRoute::parse(target).requires_auth() }
    }
}

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Render the requested view inside the shared chrome.
    Render,
    /// Leave for `to`; `replace` keeps the blocked page out of history.
    Redirect { to: &'static str, replace: bool },
}

/// Decide whether `navigation` may render given current session presence.
#[must_use]
pub fn authorize(navigation: Navigation<'_>, session_present: bool) -> Access {
    if navigation.requires_auth && !session_present {
        Access::Redirect { to: LOGIN_PATH, replace: true }
    } else {
        Access::Render
    }
}
