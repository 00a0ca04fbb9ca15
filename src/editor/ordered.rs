//! Ordered list editing shared by paragraphs, quota periods, slides, blocks and form fields.
//!
//! None of these operations fail: a missing id or an out-of-range move leaves the
//! list untouched and reports `false`.

use crate::models::Identified;

/// Append a record and hand back a reference to it.
pub fn add<T>(items: &mut Vec<T>, item: T) -> &T {
    items.push(item);
    &items[items.len() - 1]
}

/// Apply `change` to the record with the given id.
pub fn update<T: Identified>(items: &mut [T], id: &str, change: impl FnOnce(&mut T)) -> bool {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            change(item);
            true
        }
        None => false,
    }
}

pub fn remove<T: Identified>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Swap with the previous record. The first record stays put.
pub fn move_up<T>(items: &mut [T], index: usize) -> bool {
    if index == 0 || index >= items.len() {
        return false;
    }
    items.swap(index, index - 1);
    true
}

/// Swap with the next record. The last record stays put.
pub fn move_down<T>(items: &mut [T], index: usize) -> bool {
    match index.checked_add(1) {
        Some(next) if next < items.len() => {
            items.swap(index, next);
            true
        }
        _ => false,
    }
}

pub fn position<T: Identified>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// Drop `source_id` onto `dest_id`: remove the source and reinsert it at the
/// destination's index.
pub fn move_to<T: Identified>(items: &mut Vec<T>, source_id: &str, dest_id: &str) -> bool {
    let (Some(from), Some(to)) = (position(items, source_id), position(items, dest_id)) else {
        return false;
    };
    if from == to {
        return false;
    }
    let item = items.remove(from);
    items.insert(to.min(items.len()), item);
    true
}
