//! Domain layer - Entry model and pure functions over entry collections

pub mod codec;
pub mod entry;
pub mod quick_add;
pub mod timestamp;

pub use entry::{sort_newest_first, Entry};
pub use quick_add::{suggest, QuickAdd, SuggestOptions};
