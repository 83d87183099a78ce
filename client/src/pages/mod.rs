//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped form state and delegates shared rendering to
//! `components`. Pages receive the API client (and, for login, the session
//! store) as props.

pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod project;
pub mod register;
