//! CSV export of the task list.
//!
//! The column set is a fixed literal consumed by humans and spreadsheets;
//! it is not validated on re-import, so it must not drift.

use crate::error::{Result, TaskdeckError};
use crate::store::Task;
use chrono::SecondsFormat;

/// Default filename offered for the exported attachment.
pub const EXPORT_FILENAME: &str = "list_of_tasks.csv";

/// Header row written on every export.
pub const EXPORT_HEADER: [&str; 5] = ["ID", "Task", "Completed", "Created At", "Updated At"];

/// Serialize the ordered task list to CSV text.
///
/// Booleans are rendered `True`/`False` and timestamps as RFC 3339 with
/// a timezone offset, matching what the export always looked like.
pub fn export_csv(tasks: &[Task]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;

    for task in tasks {
        writer.write_record([
            task.id.to_string(),
            task.text.clone(),
            render_bool(task.done),
            task.created_at.to_rfc3339_opts(SecondsFormat::Millis, false),
            task.updated_at.to_rfc3339_opts(SecondsFormat::Millis, false),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TaskdeckError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn render_bool(value: bool) -> String {
    if value { "True".to_string() } else { "False".to_string() }
}
