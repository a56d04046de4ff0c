//! taskdeck - a small task tracker with CSV transfer
//!
//! Tasks live in a SQLite store with permanent ids; the contact book is a
//! flat CSV file with densely renumbered ids. CSV import/export connects
//! the task store to the outside world.

pub mod contacts;
pub mod error;
pub mod store;
pub mod transfer;

pub use error::{Result, TaskdeckError};
