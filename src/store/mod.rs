//! Storage layer for taskdeck.
//!
//! Tasks live in a SQLite database owned by [`TaskStore`]. The store is
//! constructed once at process start and handed to whoever needs it; there
//! is no global connection.
//!
//! # Example
//!
//! ```ignore
//! use taskdeck::store::{NewTask, TaskStore};
//! use std::path::Path;
//!
//! let store = TaskStore::open(Path::new("tasks.db"))?;
//! let task = store.create(NewTask::text("grade quizzes"))?;
//! let all = store.list()?;
//! ```

mod records;
mod task_store;

pub use records::{NewTask, Task, TaskPatch};
pub use task_store::{TaskStore, now};
