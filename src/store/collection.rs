//! Pure collection operations: upsert by id and the seed merge.

use std::collections::HashSet;

use crate::models::Identified;

/// Replace the record sharing `entity`'s id, or append it.
///
/// Returns `true` when the record was appended.
pub fn upsert<T: Identified>(items: &mut Vec<T>, entity: T) -> bool {
    match items.iter_mut().find(|item| item.id() == entity.id()) {
        Some(slot) => {
            *slot = entity;
            false
        }
        None => {
            items.push(entity);
            true
        }
    }
}

/// Seed records (overridden by persisted records with the same id) followed by
/// the persisted records the seed does not know about. Seed ids listed in
/// `hidden` are dropped unless a persisted record brings them back.
pub fn merge_with_seed<T: Identified>(
    seed: Vec<T>,
    persisted: Vec<T>,
    hidden: &HashSet<String>,
) -> Vec<T> {
    let mut persisted: Vec<Option<T>> = persisted.into_iter().map(Some).collect();
    let mut merged = Vec::with_capacity(seed.len() + persisted.len());

    for record in seed {
        let override_slot = persisted
            .iter_mut()
            .find(|slot| matches!(slot, Some(p) if p.id() == record.id()));
        match override_slot.and_then(Option::take) {
            Some(stored) => merged.push(stored),
            None if hidden.contains(record.id()) => {}
            None => merged.push(record),
        }
    }

    let mut seen: HashSet<String> = merged.iter().map(|r| r.id().to_string()).collect();
    for record in persisted.into_iter().flatten() {
        if seen.insert(record.id().to_string()) {
            merged.push(record);
        }
    }

    merged
}
