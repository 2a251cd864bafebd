use chrono::Utc;

use crate::model::item::{ItemId, ListItem};
use crate::model::todo::Todo;

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

/// Generate the id for a new item: current time in milliseconds, bumped past
/// the list's maximum when the clock has not advanced since the last add.
/// Ids stay unique and monotonically increasing within a list.
pub fn fresh_id<I: ListItem>(list: &[I]) -> ItemId {
    let now = Utc::now().timestamp_millis();
    let max = list.iter().map(|item| item.id()).max().unwrap_or(0);
    if now > max { now } else { max + 1 }
}

// ---------------------------------------------------------------------------
// Mutation operations
//
// All operations are pure: they take the current list and return a new one,
// leaving the input untouched. Validation failures and unknown ids yield the
// list unchanged.
// ---------------------------------------------------------------------------

/// Append a new item built from `fields`, with a fresh id and default flags.
/// No-op when any field is blank after trimming.
pub fn add<I: ListItem>(list: &[I], fields: &I::Fields) -> Vec<I> {
    add_with_id(list, fresh_id(list), fields)
}

/// `add` with a caller-chosen id (seeding, tests).
pub fn add_with_id<I: ListItem>(list: &[I], id: ItemId, fields: &I::Fields) -> Vec<I> {
    match I::create(id, fields) {
        Some(item) => {
            let mut next = list.to_vec();
            next.push(item);
            next
        }
        None => list.to_vec(),
    }
}

/// Remove the item with the given id. No-op when absent; idempotent.
pub fn delete<I: ListItem>(list: &[I], id: ItemId) -> Vec<I> {
    list.iter()
        .filter(|item| item.id() != id)
        .cloned()
        .collect()
}

/// Invert the `done` flag of the matching todo. No-op when absent.
pub fn toggle(list: &[Todo], id: ItemId) -> Vec<Todo> {
    list.iter()
        .map(|todo| {
            if todo.id == id {
                Todo {
                    done: !todo.done,
                    ..todo.clone()
                }
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// Replace the editable fields of the matching item, keeping id and flags.
/// The item is left unchanged when any new field is blank after trimming,
/// or when the id is absent.
pub fn update<I: ListItem>(list: &[I], id: ItemId, fields: &I::Fields) -> Vec<I> {
    list.iter()
        .map(|item| {
            if item.id() == id {
                item.with_fields(fields).unwrap_or_else(|| item.clone())
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Look up an item by id.
pub fn find<I: ListItem>(list: &[I], id: ItemId) -> Option<&I> {
    list.iter().find(|item| item.id() == id)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
