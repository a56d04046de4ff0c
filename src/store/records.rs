//! Task record and the field carriers used by the store API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single task row as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    //=== Identity ===
    /// Store-assigned identifier, monotonic, never reused after deletion
    pub id: i64,

    //=== Content ===
    /// Task description; always non-empty after trimming
    pub text: String,

    /// Completion flag
    pub done: bool,

    /// Assigned teacher (extended field, empty when unset)
    pub teacher: String,

    /// Subject being taught (extended field, empty when unset)
    pub subject: String,

    /// Assignment flag. Boolean despite the date-like name; see DESIGN.md.
    pub assigned_date: bool,

    //=== Timestamps ===
    /// Set once at creation, millisecond precision, UTC
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation; always >= created_at
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a task. `text` is mandatory; the store silently
/// ignores a create whose text trims to empty.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub text: String,
    pub teacher: String,
    pub subject: String,
}

impl NewTask {
    /// Create task fields from just a description.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Partial update: fields that are `None` or trim to empty are left
/// unchanged on the stored record.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub teacher: Option<String>,
    pub subject: Option<String>,
}

impl TaskPatch {
    /// True when no field of the patch would take effect.
    pub fn is_empty(&self) -> bool {
        [&self.text, &self.teacher, &self.subject]
            .iter()
            .all(|f| f.as_deref().map_or(true, |v| v.trim().is_empty()))
    }
}
