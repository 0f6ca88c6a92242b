//! Presentation rules.
//!
//! One rule: rows whose status is `C - Revise and Resubmit` or
//! `D - Rejected` are flagged so every view (full table, search results,
//! filtered views) can highlight documents needing attention. Pure
//! function; views apply it independently per row.

use crate::schema::{DocumentRecord, Status};

/// Style hint for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleHint {
    Normal,
    Flagged,
}

impl StyleHint {
    /// Marker text for plain-text surfaces.
    pub fn marker(&self) -> &'static str {
        match self {
            StyleHint::Normal => " ",
            StyleHint::Flagged => "!",
        }
    }
}

/// Style hint for a record, from its status alone.
pub fn row_style(record: &DocumentRecord) -> StyleHint {
    match record.status {
        Some(Status::ReviseAndResubmit) | Some(Status::Rejected) => StyleHint::Flagged,
        _ => StyleHint::Normal,
    }
}
