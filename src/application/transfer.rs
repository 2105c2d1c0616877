//! Export and import of the whole list

use crate::application::EntryStore;
use crate::domain::codec;
use crate::error::Result;
use crate::infrastructure::DurableSlot;
use log::warn;

/// Exact stored text of the list, `[]` when nothing was stored yet
pub fn export<S: DurableSlot>(store: &EntryStore<S>) -> Result<String> {
    store.raw_state()
}

/// Replace the whole list with the entries encoded in `text`.
///
/// Returns the number of imported entries. On a decode error the store is
/// left untouched.
pub fn import<S: DurableSlot>(store: &mut EntryStore<S>, text: &str) -> Result<usize> {
    let entries = codec::import_state(text).inspect_err(|e| {
        warn!("import rejected: {}", e);
    })?;
    let count = entries.len();
    store.replace_all(entries)?;
    Ok(count)
}
