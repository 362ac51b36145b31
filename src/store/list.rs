//! Copy-on-write operations over shared record lists.
//!
//! Each helper returns a list for the next resume. Entries that are not
//! touched stay the same allocation; when nothing changes the input list
//! itself is returned.

use std::sync::Arc;

use crate::model::{RecordList, Record};

/// Append `item` after the existing entries.
pub(crate) fn appended<T>(list: &RecordList<T>, item: T) -> RecordList<T> {
    let mut items = Vec::with_capacity(list.len() + 1);
    items.extend(list.iter().cloned());
    items.push(Arc::new(item));
    Arc::new(items)
}

/// Merge `patch` into every entry whose id is `id`.
pub(crate) fn updated<T: Record>(list: &RecordList<T>, id: &str, patch: &T::Patch) -> RecordList<T> {
    if !list.iter().any(|entry| entry.id() == id) {
        return Arc::clone(list);
    }

    let items = list
        .iter()
        .map(|entry| {
            if entry.id() == id {
                Arc::new(entry.merged(patch))
            } else {
                Arc::clone(entry)
            }
        })
        .collect();
    Arc::new(items)
}

/// Drop every entry whose id is `id`.
pub(crate) fn removed<T: Record>(list: &RecordList<T>, id: &str) -> RecordList<T> {
    if !list.iter().any(|entry| entry.id() == id) {
        return Arc::clone(list);
    }

    let items = list
        .iter()
        .filter(|entry| entry.id() != id)
        .cloned()
        .collect();
    Arc::new(items)
}
