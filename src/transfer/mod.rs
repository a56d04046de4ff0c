//! CSV transfer: bulk export of the task list and bulk import of
//! uploaded CSV bytes.

mod export;
mod import;

pub use export::{EXPORT_FILENAME, EXPORT_HEADER, export_csv};
pub use import::import_csv;
