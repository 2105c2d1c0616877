//! Quick-add use case

use crate::application::EntryStore;
use crate::domain::{suggest, Entry, QuickAdd, SuggestOptions};
use crate::error::{RememberError, Result};
use crate::infrastructure::DurableSlot;

/// Current suggestions, computed over the entries in storage order
pub fn suggestions<S: DurableSlot>(store: &EntryStore<S>, options: SuggestOptions) -> Vec<QuickAdd> {
    suggest(store.entries(), options)
}

/// Add a new entry with the content of the `position`-th suggestion (1-based)
pub fn quick_add<S: DurableSlot>(
    store: &mut EntryStore<S>,
    options: SuggestOptions,
    position: usize,
) -> Result<Entry> {
    let available = suggestions(store, options);
    let choice = position
        .checked_sub(1)
        .and_then(|idx| available.get(idx))
        .ok_or(RememberError::NoSuggestion {
            position,
            available: available.len(),
        })?;

    store.add(&choice.content)
}
