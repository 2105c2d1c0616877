//! rememberit - Personal note and reminder list
//!
//! Short timestamped entries kept in a JSON slot under `.rememberit/`, with
//! edit/delete/reset, JSON export and import, and quick-add suggestions
//! derived from repeated entries.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::RememberError;
