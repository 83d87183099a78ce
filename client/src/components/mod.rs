//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components receive the session store as a prop from `App`; none of them
//! reach for global state.

pub mod layout;
pub mod record_fields;
pub mod require_auth;
