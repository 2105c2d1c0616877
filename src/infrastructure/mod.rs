//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod persistence;
pub mod repository;
pub mod slot;

pub use config::Config;
pub use persistence::{Persistence, ENTRIES_KEY};
pub use repository::{FileSystemRepository, ListRepository};
pub use slot::{DurableSlot, MemorySlot};
