//! CSV transfer integration tests
//!
//! Covers the import pipeline end to end and the properties connecting
//! import and export.

use taskdeck::error::Result;
use taskdeck::store::{NewTask, TaskStore};
use taskdeck::transfer::{EXPORT_HEADER, export_csv, import_csv};

/// Column values from an exported CSV, skipping the header row.
fn export_column(out: &str, idx: usize) -> Vec<String> {
    let mut reader = csv::Reader::from_reader(out.as_bytes());
    reader
        .records()
        .map(|r| r.unwrap().get(idx).unwrap().to_string())
        .collect()
}

/// Integration test: exporting imported rows reproduces the text column
#[test]
fn test_import_then_export_reproduces_texts() -> Result<()> {
    let mut store = TaskStore::open_in_memory()?;
    let uploaded = b"text\ncollect permission slips\n\"plan, prep\"\nbook the hall\n";
    assert_eq!(import_csv(&mut store, uploaded)?, 3);

    let out = export_csv(&store.list()?)?;
    let texts = export_column(&out, 1);
    assert_eq!(texts, vec!["collect permission slips", "plan, prep", "book the hall"]);

    let completed = export_column(&out, 2);
    assert!(completed.iter().all(|c| c == "False"));

    Ok(())
}

/// Integration test: exported header is the fixed literal
#[test]
fn test_export_header_literal() -> Result<()> {
    let store = TaskStore::open_in_memory()?;
    let out = export_csv(&store.list()?)?;
    let header: Vec<&str> = out.lines().next().unwrap().split(',').collect();
    assert_eq!(header, EXPORT_HEADER);
    Ok(())
}

/// Integration test: imported rows share one batch timestamp while
/// hand-created rows keep their own
#[test]
fn test_batch_timestamp_distinct_from_existing_rows() -> Result<()> {
    let mut store = TaskStore::open_in_memory()?;
    store.create(NewTask::text("pre-existing"))?;

    std::thread::sleep(std::time::Duration::from_millis(5));
    import_csv(&mut store, b"batch one\nbatch two\n")?;

    let tasks = store.list()?;
    let batch: Vec<_> = tasks.iter().filter(|t| t.text.starts_with("batch")).collect();
    assert_eq!(batch.len(), 2);
    assert_eq!(batch[0].created_at, batch[1].created_at);

    let existing = tasks.iter().find(|t| t.text == "pre-existing").unwrap();
    assert!(existing.created_at < batch[0].created_at);

    Ok(())
}

/// Integration test: a header-only upload leaves the store empty
#[test]
fn test_header_only_upload_imports_nothing() -> Result<()> {
    let mut store = TaskStore::open_in_memory()?;
    assert_eq!(import_csv(&mut store, b"text\n")?, 0);
    assert_eq!(store.count()?, 0);
    Ok(())
}

/// Integration test: a blank line ahead of a lone `text` row demotes it
/// to data, since header detection counts physical lines
#[test]
fn test_blank_line_then_lone_text_row_is_imported() -> Result<()> {
    let mut store = TaskStore::open_in_memory()?;
    assert_eq!(import_csv(&mut store, b"\ntext\nreal task\n")?, 2);

    let texts: Vec<String> = store.list()?.iter().map(|t| t.text.clone()).collect();
    assert!(texts.contains(&"text".to_string()));
    assert!(texts.contains(&"real task".to_string()));
    Ok(())
}

/// Integration test: a two-column first row is data, not a header
#[test]
fn test_two_column_first_row_is_imported() -> Result<()> {
    let mut store = TaskStore::open_in_memory()?;
    assert_eq!(import_csv(&mut store, b"text,extra\n")?, 1);
    assert_eq!(store.list()?[0].text, "text");
    Ok(())
}

/// Integration test: decode fallback accepts invalid UTF-8
#[test]
fn test_latin1_upload_round_trips_through_export() -> Result<()> {
    let mut store = TaskStore::open_in_memory()?;
    // 0xFC is 'ü' in Latin-1 and invalid as a standalone UTF-8 byte.
    assert_eq!(import_csv(&mut store, b"pr\xfcfung vorbereiten\n")?, 1);

    let out = export_csv(&store.list()?)?;
    assert!(out.contains("pr\u{fc}fung vorbereiten"));
    Ok(())
}
