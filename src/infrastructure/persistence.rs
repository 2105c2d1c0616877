//! Entry collection persistence on top of a durable slot

use crate::domain::{codec, Entry};
use crate::error::Result;
use crate::infrastructure::DurableSlot;
use log::{debug, warn};

/// Slot key holding the serialized entry collection
pub const ENTRIES_KEY: &str = "entries";

/// Reads and writes the whole entry collection under [`ENTRIES_KEY`]
#[derive(Debug, Clone)]
pub struct Persistence<S> {
    slot: S,
}

impl<S: DurableSlot> Persistence<S> {
    pub fn new(slot: S) -> Self {
        Persistence { slot }
    }

    /// Load the stored collection.
    ///
    /// Never fails: a missing, unreadable or malformed slot yields an empty
    /// collection.
    pub fn load(&self) -> Vec<Entry> {
        let raw = match self.slot.read(ENTRIES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored entries, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!("could not read stored entries, starting empty: {}", e);
                return Vec::new();
            }
        };

        match codec::import_state(&raw) {
            Ok(entries) => {
                debug!("loaded {} entries", entries.len());
                entries
            }
            Err(e) => {
                warn!("stored entries are malformed, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Serialize and store the full collection, replacing the previous value
    pub fn save(&mut self, entries: &[Entry]) -> Result<()> {
        let text = codec::export_state(entries)?;
        self.slot.write(ENTRIES_KEY, &text)?;
        debug!("saved {} entries", entries.len());
        Ok(())
    }

    /// Exact stored text, if any
    pub fn raw(&self) -> Result<Option<String>> {
        self.slot.read(ENTRIES_KEY)
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }
}
