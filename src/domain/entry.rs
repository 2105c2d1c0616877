//! Entry model

use crate::domain::timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const SHORT_ID_LEN: usize = 8;

/// A single remembered item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Sole key for update/delete; never changes after creation
    pub id: String,
    pub content: String,
    #[serde(with = "timestamp::serde_format")]
    pub created: NaiveDateTime,
}

impl Entry {
    pub fn new(id: String, content: String, created: NaiveDateTime) -> Self {
        Entry {
            id,
            content,
            created,
        }
    }

    /// Create an entry with a fresh id stamped with the current time
    pub fn create(content: String) -> Self {
        Entry::new(Uuid::new_v4().to_string(), content, timestamp::now())
    }

    /// Leading characters of the id, for display
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }
}

/// Copy of `entries` ordered newest first.
///
/// The sort is stable, so entries sharing a timestamp keep their storage order.
pub fn sort_newest_first(entries: &[Entry]) -> Vec<Entry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.created.cmp(&a.created));
    sorted
}
