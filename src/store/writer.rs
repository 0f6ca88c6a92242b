//! Backing file writer.
//!
//! Every save rewrites the whole file: header row plus one row per record
//! in display order. The write lands in a temp file in the same directory,
//! is synced, then renamed over the backing file, so a crash mid-save never
//! leaves a half-written register behind.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::schema::{Column, DocumentRecord};

use super::csv;
use super::errors::{StoreError, StoreResult};

/// Serializes the full table to CSV bytes: header plus one row per record.
///
/// This is the single serialization used by both the backing file and the
/// CSV export, which is what makes the export loadable by [`load`]
/// (round-trip) by construction.
///
/// [`load`]: super::reader::load
pub fn serialize(records: &[DocumentRecord]) -> Vec<u8> {
    let mut out = String::new();
    let header: Vec<String> = Column::headers().iter().map(|h| h.to_string()).collect();
    out.push_str(&csv::write_row(&header));
    out.push('\n');
    for record in records {
        out.push_str(&csv::write_row(&record.cells()));
        out.push('\n');
    }
    out.into_bytes()
}

/// Overwrites the backing file with the full table.
pub fn save(path: &Path, records: &[DocumentRecord]) -> StoreResult<()> {
    let bytes = serialize(records);

    let tmp_path = match (path.parent(), path.file_name()) {
        (Some(parent), Some(name)) => {
            let mut tmp_name = name.to_os_string();
            tmp_name.push(".tmp");
            parent.join(tmp_name)
        }
        _ => {
            return Err(StoreError::persistence(
                path,
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a file path"),
            ))
        }
    };

    let write_tmp = || -> std::io::Result<()> {
        let mut file = File::create(&tmp_path)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        Ok(())
    };

    write_tmp().map_err(|e| StoreError::persistence(path, e))?;

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        StoreError::persistence(path, e)
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Discipline;
    use crate::store::reader;
    use chrono::NaiveDate;

    fn record(doc_ref: &str) -> DocumentRecord {
        DocumentRecord {
            file_name: format!("{}.pdf", doc_ref),
            doc_ref: doc_ref.into(),
            title: "Pump Room Layout".into(),
            status: None,
            discipline: Some(Discipline::Mechanical),
            file_type: "Drawing".into(),
            rev_date: None,
            delivery_date: NaiveDate::from_ymd_opt(2024, 6, 1),
            project: "Riverside Depot".into(),
            originator: "ACME Design".into(),
            stage: "Stage 3".into(),
        }
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let bytes = serialize(&[]);
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, format!("{}\n", Column::headers().join(",")));
    }

    #[test]
    fn test_save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("documents.csv");

        let records = vec![record("R-1"), record("R-2")];
        save(&path, &records).unwrap();

        let loaded = reader::load(&path).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_awkward_text_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("documents.csv");

        let mut tricky = record("R-3");
        tricky.title = "Sections, \"as built\"\nsheet 2".into();
        tricky.project = "  padded  ".into();

        save(&path, std::slice::from_ref(&tricky)).unwrap();
        let loaded = reader::load(&path).unwrap();
        assert_eq!(loaded, vec![tricky]);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("documents.csv");

        save(&path, &[record("R-1"), record("R-2")]).unwrap();
        save(&path, &[record("R-9")]).unwrap();

        let loaded = reader::load(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].doc_ref, "R-9");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("documents.csv");
        let err = save(&path, &[record("R-1")]).unwrap_err();
        assert!(matches!(err, StoreError::Persistence { .. }));
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("documents.csv");
        save(&path, &[record("R-1")]).unwrap();

        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .filter(|n| n.to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
