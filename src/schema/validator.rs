//! Create-time validation of candidate records.
//!
//! Validation runs once, before a record is appended to the register. It is
//! not re-run on edit: an edit replaces the stored fields verbatim, so a
//! stricter caller must validate again itself.
//!
//! Required: every column except Status and Rev Date. A pick-list column
//! left unselected counts as missing. Whitespace-only text counts as empty.

use super::errors::ValidationError;
use super::types::{Column, DocumentRecord};

/// Validates a candidate record for creation.
///
/// Returns the full set of missing or unselected columns on failure, so the
/// caller can surface one aggregate warning.
pub fn validate(candidate: &DocumentRecord) -> Result<(), ValidationError> {
    let mut missing: Vec<String> = Vec::new();

    require_text(&mut missing, Column::FileName, &candidate.file_name);
    require_text(&mut missing, Column::DocRef, &candidate.doc_ref);
    require_text(&mut missing, Column::Title, &candidate.title);

    if candidate.discipline.is_none() {
        missing.push(Column::Discipline.header().to_string());
    }

    require_text(&mut missing, Column::FileType, &candidate.file_type);

    if candidate.delivery_date.is_none() {
        missing.push(Column::DeliveryDate.header().to_string());
    }

    require_text(&mut missing, Column::Project, &candidate.project);
    require_text(&mut missing, Column::Originator, &candidate.originator);
    require_text(&mut missing, Column::Stage, &candidate.stage);

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields { missing })
    }
}

fn require_text(missing: &mut Vec<String>, column: Column, value: &str) {
    if value.trim().is_empty() {
        missing.push(column.header().to_string());
    }
}
