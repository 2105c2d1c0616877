//! Entry store: the only stateful component
//!
//! Every mutation builds the next collection, writes it through the
//! persistence adapter and only then commits it in memory. A failed write
//! leaves both the slot and the store unchanged.

use crate::domain::{sort_newest_first, Entry};
use crate::error::{RememberError, Result};
use crate::infrastructure::{DurableSlot, Persistence};
use chrono::NaiveDateTime;
use log::info;

/// Owns the entry collection and the slot it is persisted to
#[derive(Debug)]
pub struct EntryStore<S> {
    persistence: Persistence<S>,
    entries: Vec<Entry>,
}

impl<S: DurableSlot> EntryStore<S> {
    /// Open a store over `slot`, loading whatever it holds
    pub fn open(slot: S) -> Self {
        let persistence = Persistence::new(slot);
        let entries = persistence.load();
        EntryStore {
            persistence,
            entries,
        }
    }

    /// Create a new entry stamped with the current time
    pub fn add(&mut self, content: &str) -> Result<Entry> {
        if content.is_empty() {
            return Err(RememberError::EmptyContent);
        }

        let entry = Entry::create(content.to_string());
        let mut next = self.entries.clone();
        next.push(entry.clone());
        self.commit(next)?;

        info!("added entry {}", entry.id);
        Ok(entry)
    }

    /// Replace content and timestamp of the entry with `id`
    pub fn update(&mut self, id: &str, content: &str, created: NaiveDateTime) -> Result<Entry> {
        if content.is_empty() {
            return Err(RememberError::EmptyContent);
        }

        let mut next = self.entries.clone();
        let mut updated = None;
        for entry in next.iter_mut().filter(|e| e.id == id) {
            entry.content = content.to_string();
            entry.created = created;
            updated = Some(entry.clone());
        }
        let updated = updated.ok_or_else(|| RememberError::EntryNotFound(id.to_string()))?;
        self.commit(next)?;

        info!("updated entry {}", id);
        Ok(updated)
    }

    /// Remove the entry with `id`
    pub fn delete(&mut self, id: &str) -> Result<Entry> {
        let removed = self
            .get(id)
            .cloned()
            .ok_or_else(|| RememberError::EntryNotFound(id.to_string()))?;

        let next: Vec<Entry> = self.entries.iter().filter(|e| e.id != id).cloned().collect();
        self.commit(next)?;

        info!("deleted entry {}", id);
        Ok(removed)
    }

    /// Remove every entry
    pub fn reset(&mut self) -> Result<()> {
        let count = self.entries.len();
        self.commit(Vec::new())?;
        info!("reset list, removed {} entries", count);
        Ok(())
    }

    /// Replace the whole collection verbatim
    pub fn replace_all(&mut self, entries: Vec<Entry>) -> Result<()> {
        let count = entries.len();
        self.commit(entries)?;
        info!("replaced list with {} entries", count);
        Ok(())
    }

    /// Entries newest first
    pub fn list(&self) -> Vec<Entry> {
        sort_newest_first(&self.entries)
    }

    /// Entries in storage order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Resolve a full id or a unique id prefix to the full id
    pub fn resolve(&self, id_or_prefix: &str) -> Result<String> {
        if id_or_prefix.is_empty() {
            return Err(RememberError::EntryNotFound(String::new()));
        }
        if let Some(entry) = self.get(id_or_prefix) {
            return Ok(entry.id.clone());
        }

        let matches: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| e.id.starts_with(id_or_prefix))
            .collect();

        match matches.as_slice() {
            [] => Err(RememberError::EntryNotFound(id_or_prefix.to_string())),
            [entry] => Ok(entry.id.clone()),
            _ => Err(RememberError::AmbiguousId {
                prefix: id_or_prefix.to_string(),
                matches: matches.len(),
            }),
        }
    }

    /// Exact serialized slot contents, `[]` if nothing was ever stored
    pub fn raw_state(&self) -> Result<String> {
        Ok(self
            .persistence
            .raw()?
            .unwrap_or_else(|| "[]".to_string()))
    }

    pub fn slot(&self) -> &S {
        self.persistence.slot()
    }

    fn commit(&mut self, next: Vec<Entry>) -> Result<()> {
        self.persistence.save(&next)?;
        self.entries = next;
        Ok(())
    }
}
