//! Backing file reader.
//!
//! Reads the whole table in one pass at startup. The register is
//! human-scale, so there is no streaming or indexing; the file either parses
//! completely or the load fails.

use std::fs;
use std::io;
use std::path::Path;

use crate::schema::{Column, DocumentRecord};

use super::csv;
use super::errors::{StoreError, StoreResult};

/// Loads the full table from the backing file.
///
/// A missing file yields an empty table. Anything else that prevents a
/// faithful load — unreadable file, bad quoting, a header that is not the
/// fixed column set, a row with the wrong cell count or an unparseable
/// cell — aborts with an error instead of guessing.
pub fn load(path: &Path) -> StoreResult<Vec<DocumentRecord>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::read_failed(path, e)),
    };

    let rows = csv::parse(&text).map_err(|reason| StoreError::corrupt(path, reason))?;

    let mut rows = rows.into_iter();
    let header = rows
        .next()
        .ok_or_else(|| StoreError::corrupt(path, "missing header row"))?;

    let expected = Column::headers();
    if header != expected {
        return Err(StoreError::corrupt(
            path,
            format!(
                "header mismatch: expected [{}], got [{}]",
                expected.join(", "),
                header.join(", ")
            ),
        ));
    }

    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        let record = DocumentRecord::from_cells(&row)
            .map_err(|e| StoreError::corrupt(path, format!("row {}: {}", index + 1, e)))?;
        records.push(record);
    }

    Ok(records)
}
