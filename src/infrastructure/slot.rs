//! Durable key-value slots

use crate::error::Result;
use std::collections::HashMap;

/// A durable key-value store holding serialized text.
///
/// Writes replace the previous value as a whole; a reader never observes a
/// partially written value.
pub trait DurableSlot {
    /// Read the value stored under `key`, `None` if nothing was ever written
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory slot, used under test and for throwaway lists
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    values: HashMap<String, String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        MemorySlot::default()
    }

    /// Slot pre-populated with one key
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut slot = MemorySlot::new();
        slot.values.insert(key.to_string(), value.to_string());
        slot
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl DurableSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
