//! CSV import: uploaded bytes become new tasks.
//!
//! Only the first column of each row is imported. Every row in one upload
//! shares a single batch timestamp taken when the import starts, and the
//! whole batch is inserted in one transaction or not at all.

use crate::error::Result;
use crate::store::{TaskStore, now};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Decode uploaded bytes as UTF-8 (dropping a leading BOM), falling back
/// to Latin-1 when the bytes are not valid UTF-8. Latin-1 maps every byte
/// to the code point of the same value, so the fallback cannot fail.
fn decode_upload(bytes: &[u8]) -> String {
    let without_bom = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(without_bom) {
        Ok(text) => text.to_string(),
        // Decode the original bytes, BOM included, as Latin-1.
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

/// Extract task texts from CSV content.
///
/// Rules, in order: empty rows are skipped; a row whose first field trims
/// to empty is skipped even if other columns have content; the very first
/// physical line is skipped as a header iff its trimmed first field is
/// `text` (case-insensitive) and the row has exactly one column. A lone
/// `text` row anywhere else — including after a leading blank line — or a
/// multi-column first row starting with `text`, is data.
fn parse_rows(content: &str) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut texts = Vec::new();
    for record in reader.records() {
        let record = record?;
        let first = record.get(0).unwrap_or("").trim();
        if first.is_empty() {
            continue;
        }
        // Header detection counts physical lines, not parsed records:
        // blank lines push a lone `text` row off line 1 and it is data.
        let on_first_line = record.position().map(csv::Position::line) == Some(1);
        if on_first_line && first.eq_ignore_ascii_case("text") && record.len() == 1 {
            continue;
        }
        texts.push(first.to_string());
    }
    Ok(texts)
}

/// Import uploaded CSV bytes into the store. Returns the number of tasks
/// created. Imported tasks start not-done with empty teacher/subject
/// fields; an upload that yields no rows never touches the store.
pub fn import_csv(store: &mut TaskStore, bytes: &[u8]) -> Result<usize> {
    let batch_ts = now();
    let content = decode_upload(bytes);
    let texts = parse_rows(&content)?;
    store.insert_batch(&texts, batch_ts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_plain_utf8() {
        assert_eq!(decode_upload("caf\u{e9}".as_bytes()), "caf\u{e9}");
    }

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("r\u{e9}viser".as_bytes());
        assert_eq!(decode_upload(&bytes), "r\u{e9}viser");
    }

    #[test]
    fn test_decode_invalid_utf8_falls_back_to_latin1() {
        // 0xE9 alone is invalid UTF-8 but is 'é' in Latin-1.
        let bytes = b"caf\xe9";
        assert_eq!(decode_upload(bytes), "caf\u{e9}");
    }

    #[test]
    fn test_parse_skips_lone_header_row() {
        let texts = parse_rows("text\nwrite syllabus\n").unwrap();
        assert_eq!(texts, vec!["write syllabus"]);
    }

    #[test]
    fn test_parse_header_match_is_case_insensitive() {
        let texts = parse_rows("TEXT\nfirst\n").unwrap();
        assert_eq!(texts, vec!["first"]);
    }

    #[test]
    fn test_parse_multi_column_first_row_is_data() {
        let texts = parse_rows("text,extra\nsecond\n").unwrap();
        assert_eq!(texts, vec!["text", "second"]);
    }

    #[test]
    fn test_parse_lone_text_row_after_blank_line_is_data() {
        // A blank first line shifts the lone `text` row off line 1, so it
        // is imported, matching physical-row counting.
        let texts = parse_rows("\ntext\nwrite syllabus\n").unwrap();
        assert_eq!(texts, vec!["text", "write syllabus"]);
    }

    #[test]
    fn test_parse_lone_header_later_is_data() {
        let texts = parse_rows("first\ntext\n").unwrap();
        assert_eq!(texts, vec!["first", "text"]);
    }

    #[test]
    fn test_parse_only_first_column_is_imported() {
        let texts = parse_rows("grade papers,Ms. Lee,Math\n").unwrap();
        assert_eq!(texts, vec!["grade papers"]);
    }

    #[test]
    fn test_parse_skips_blank_first_field_rows() {
        let texts = parse_rows("first\n,orphan column\n  ,also orphan\nlast\n").unwrap();
        assert_eq!(texts, vec!["first", "last"]);
    }

    #[test]
    fn test_parse_trims_first_field() {
        let texts = parse_rows("  padded task  \n").unwrap();
        assert_eq!(texts, vec!["padded task"]);
    }

    #[test]
    fn test_parse_handles_quoted_fields() {
        let texts = parse_rows("\"plan, prep\"\n\"line\none\"\n").unwrap();
        assert_eq!(texts, vec!["plan, prep", "line\none"]);
    }

    #[test]
    fn test_import_lone_header_creates_nothing() {
        let mut store = TaskStore::open_in_memory().unwrap();
        assert_eq!(import_csv(&mut store, b"text\n").unwrap(), 0);
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_import_shares_one_batch_timestamp() {
        let mut store = TaskStore::open_in_memory().unwrap();
        let n = import_csv(&mut store, b"alpha\nbeta\ngamma\n").unwrap();
        assert_eq!(n, 3);

        let tasks = store.list().unwrap();
        assert_eq!(tasks.len(), 3);
        let stamp = tasks[0].created_at;
        assert!(tasks.iter().all(|t| t.created_at == stamp));
        assert!(tasks.iter().all(|t| !t.done));
        assert!(tasks.iter().all(|t| t.teacher.is_empty() && t.subject.is_empty()));
    }

    #[test]
    fn test_import_preserves_non_ascii_through_bom() {
        let mut store = TaskStore::open_in_memory().unwrap();
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice("\u{e9}valuer les copies\n".as_bytes());
        assert_eq!(import_csv(&mut store, &bytes).unwrap(), 1);
        assert_eq!(store.list().unwrap()[0].text, "\u{e9}valuer les copies");
    }

    #[test]
    fn test_import_latin1_file_does_not_error() {
        let mut store = TaskStore::open_in_memory().unwrap();
        assert_eq!(import_csv(&mut store, b"caf\xe9 duty\n").unwrap(), 1);
        assert_eq!(store.list().unwrap()[0].text, "caf\u{e9} duty");
    }

    #[test]
    fn test_import_empty_upload_is_a_no_op() {
        let mut store = TaskStore::open_in_memory().unwrap();
        assert_eq!(import_csv(&mut store, b"").unwrap(), 0);
        assert_eq!(store.count().unwrap(), 0);
    }
}
