//! JSON import/export of the entry collection
//!
//! The same text format backs the durable slot and the export/import surface:
//! a JSON array of `{id, content, created}` objects with `created` in the
//! canonical timestamp form.

use crate::domain::Entry;
use crate::error::{RememberError, Result};
use std::collections::HashSet;

/// Serialize entries in storage order
pub fn export_state(entries: &[Entry]) -> Result<String> {
    serde_json::to_string(entries).map_err(|e| RememberError::Parse(e.to_string()))
}

/// Decode a JSON array of entries.
///
/// Missing fields, wrong primitive types, unparseable timestamps and
/// repeated ids are all reported as [`RememberError::Parse`].
pub fn import_state(text: &str) -> Result<Vec<Entry>> {
    if text.trim().is_empty() {
        return Err(RememberError::Parse("input is empty".to_string()));
    }

    let entries: Vec<Entry> = serde_json::from_str(text)?;

    let mut seen = HashSet::new();
    if let Some(dup) = entries.iter().find(|e| !seen.insert(e.id.as_str())) {
        return Err(RememberError::Parse(format!("duplicate entry id '{}'", dup.id)));
    }

    Ok(entries)
}
