//! Local-list update rules for the project and task screens.
//!
//! The screens only touch their lists after the backend confirms a change:
//! append on create, replace-by-id on update, remove-by-id on delete.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use crate::net::types::Record;

/// Replace the record with the same id. Returns `false` if none matched.
pub fn replace_by_id<T: Record>(items: &mut [T], updated: T) -> bool {
    match items.iter_mut().find(|item| item.record_id() == updated.record_id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Remove the record with `id`. Returns `false` if none matched.
pub fn remove_by_id<T: Record>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.record_id() != id);
    items.len() != before
}

/// Trim a name/description pair, returning `None` if either is blank.
pub fn required_pair(name: &str, description: &str) -> Option<(String, String)> {
    let name = name.trim();
    let description = description.trim();
    if name.is_empty() || description.is_empty() {
        return None;
    }
    Some((name.to_owned(), description.to_owned()))
}
