//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` owns authentication state, `storage` is its persistence port,
//! and `records` holds the list-update rules the CRUD screens share.

pub mod records;
pub mod session;
pub mod storage;
