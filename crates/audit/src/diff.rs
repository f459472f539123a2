//! Field-level diffing between before/after snapshots.

use serde_json::Value as JsonValue;

use crate::event::{ChangeMap, FieldChange};

/// Compare `before` and `after` on the named fields.
///
/// Comparison is structural (JSON value equality, not reference identity);
/// a field absent from a snapshot compares as JSON null. Returns `None` when
/// no listed field differs, so callers can omit an empty changes block.
pub fn diff(before: &JsonValue, after: &JsonValue, fields: &[&str]) -> Option<ChangeMap> {
    let mut changes = ChangeMap::new();

    for &field in fields {
        let old = before.get(field).cloned().unwrap_or(JsonValue::Null);
        let new = after.get(field).cloned().unwrap_or(JsonValue::Null);
        if old != new {
            changes.insert(field.to_string(), FieldChange { old, new });
        }
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes)
    }
}
