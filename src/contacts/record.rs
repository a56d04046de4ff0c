//! Contact record for the teacher book.

use serde::{Deserialize, Serialize};

/// One teacher-assignment contact.
///
/// Identifiers are strings renumbered densely (1..N) after every
/// deletion, so they are NOT stable across deletes. The serde renames
/// pin the CSV header to the book's fixed column set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "ID")]
    pub id: String,

    #[serde(rename = "Teacher_1")]
    pub teacher_1: String,

    #[serde(rename = "Teacher_2")]
    pub teacher_2: String,

    /// Free-text date, matched by equality only, never parsed
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Subject")]
    pub subject: String,

    /// Defaults to empty until set explicitly
    #[serde(rename = "Remarks", default)]
    pub remarks: String,
}
