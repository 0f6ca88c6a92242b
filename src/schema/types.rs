//! Schema type definitions for the document register.
//!
//! The register tracks controlled documents through an approval workflow.
//! Its column set is fixed: the backing file, the CSV export, and the PDF
//! report all use the same eleven columns in the same order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::RowError;

/// Date format used in the backing file and all exports.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stable record identifier.
///
/// Assigned from a monotonic counter when a record enters the register
/// (1..n in file order on load, then counting up for new records). Mutations
/// address records by identifier, never by display position, so a delete
/// cannot shift the address of another record mid-session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u64);

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed columns of the register, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    FileName,
    DocRef,
    Title,
    Status,
    Discipline,
    FileType,
    RevDate,
    DeliveryDate,
    Project,
    Originator,
    Stage,
}

impl Column {
    /// All columns in canonical (header) order.
    pub const ALL: [Column; 11] = [
        Column::FileName,
        Column::DocRef,
        Column::Title,
        Column::Status,
        Column::Discipline,
        Column::FileType,
        Column::RevDate,
        Column::DeliveryDate,
        Column::Project,
        Column::Originator,
        Column::Stage,
    ];

    /// Header text as written to the backing file.
    pub fn header(&self) -> &'static str {
        match self {
            Column::FileName => "File Name",
            Column::DocRef => "Doc Ref",
            Column::Title => "Document Title",
            Column::Status => "Status",
            Column::Discipline => "Discipline",
            Column::FileType => "File Type",
            Column::RevDate => "Rev Date",
            Column::DeliveryDate => "Delivery Date",
            Column::Project => "Project",
            Column::Originator => "Originator",
            Column::Stage => "Project Stage",
        }
    }

    /// The full header row.
    pub fn headers() -> Vec<&'static str> {
        Self::ALL.iter().map(Column::header).collect()
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// Approval status of a submitted document.
///
/// Labels follow the submittal review codes used on the register
/// ("A - Approved" through "D - Rejected"). Status is optional: a document
/// that has not been through review yet carries no status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Approved,
    ApprovedWithComments,
    ReviseAndResubmit,
    Rejected,
}

impl Status {
    /// Every status, in review-code order.
    pub const ALL: [Status; 4] = [
        Status::Approved,
        Status::ApprovedWithComments,
        Status::ReviseAndResubmit,
        Status::Rejected,
    ];

    /// The label stored in the register.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Approved => "A - Approved",
            Status::ApprovedWithComments => "B - Approved with Comments",
            Status::ReviseAndResubmit => "C - Revise and Resubmit",
            Status::Rejected => "D - Rejected",
        }
    }

    /// Parses a status from its stored label or its single review code
    /// letter. Case-insensitive. Returns `None` for anything outside the
    /// controlled vocabulary.
    pub fn parse(input: &str) -> Option<Status> {
        let input = input.trim();
        Self::ALL.iter().copied().find(|s| {
            s.label().eq_ignore_ascii_case(input)
                || s.label()[..1].eq_ignore_ascii_case(input)
        })
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Status {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Status::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown status: '{}'", s)))
    }
}

/// Engineering discipline a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discipline {
    Architecture,
    Civil,
    Electrical,
    Mechanical,
    Surveying,
}

impl Discipline {
    /// Every discipline, alphabetical.
    pub const ALL: [Discipline; 5] = [
        Discipline::Architecture,
        Discipline::Civil,
        Discipline::Electrical,
        Discipline::Mechanical,
        Discipline::Surveying,
    ];

    /// The label stored in the register.
    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Architecture => "Architecture",
            Discipline::Civil => "Civil",
            Discipline::Electrical => "Electrical",
            Discipline::Mechanical => "Mechanical",
            Discipline::Surveying => "Surveying",
        }
    }

    /// Parses a discipline from its label, case-insensitive.
    pub fn parse(input: &str) -> Option<Discipline> {
        let input = input.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.label().eq_ignore_ascii_case(input))
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Discipline {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Discipline {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Discipline::parse(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown discipline: '{}'", s)))
    }
}

/// One tracked document's metadata row.
///
/// Field typing is strict where the vocabulary is controlled (status,
/// discipline, dates) and free text elsewhere. Optional fields map to empty
/// cells in the backing file. Create-time validation lives in
/// [`validator`](super::validator); the record itself accepts any state so
/// that edits can replace fields verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub file_name: String,
    pub doc_ref: String,
    pub title: String,
    pub status: Option<Status>,
    pub discipline: Option<Discipline>,
    pub file_type: String,
    pub rev_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub project: String,
    pub originator: String,
    pub stage: String,
}

impl DocumentRecord {
    /// Display string for one column's cell. Empty optional fields render
    /// as the empty string, matching their on-disk form.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::FileName => self.file_name.clone(),
            Column::DocRef => self.doc_ref.clone(),
            Column::Title => self.title.clone(),
            Column::Status => self.status.map(|s| s.label().to_string()).unwrap_or_default(),
            Column::Discipline => {
                self.discipline.map(|d| d.label().to_string()).unwrap_or_default()
            }
            Column::FileType => self.file_type.clone(),
            Column::RevDate => {
                self.rev_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
            }
            Column::DeliveryDate => self
                .delivery_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            Column::Project => self.project.clone(),
            Column::Originator => self.originator.clone(),
            Column::Stage => self.stage.clone(),
        }
    }

    /// The record as a full row of cells, in canonical column order.
    pub fn cells(&self) -> Vec<String> {
        Column::ALL.iter().map(|c| self.cell(*c)).collect()
    }

    /// Rebuilds a record from a row of cells in canonical column order.
    ///
    /// Cell count must match the column set exactly. Status and discipline
    /// cells must be empty or a known label; date cells must be empty or
    /// `%Y-%m-%d`. Anything else is a malformed row.
    pub fn from_cells(cells: &[String]) -> Result<DocumentRecord, RowError> {
        if cells.len() != Column::ALL.len() {
            return Err(RowError::CellCount {
                expected: Column::ALL.len(),
                actual: cells.len(),
            });
        }

        let parse_status = |cell: &str| -> Result<Option<Status>, RowError> {
            if cell.is_empty() {
                return Ok(None);
            }
            Status::parse(cell).map(Some).ok_or_else(|| RowError::BadCell {
                column: Column::Status,
                value: cell.to_string(),
            })
        };
        let parse_discipline = |cell: &str| -> Result<Option<Discipline>, RowError> {
            if cell.is_empty() {
                return Ok(None);
            }
            Discipline::parse(cell).map(Some).ok_or_else(|| RowError::BadCell {
                column: Column::Discipline,
                value: cell.to_string(),
            })
        };
        let parse_date = |cell: &str, column: Column| -> Result<Option<NaiveDate>, RowError> {
            if cell.is_empty() {
                return Ok(None);
            }
            NaiveDate::parse_from_str(cell, DATE_FORMAT)
                .map(Some)
                .map_err(|_| RowError::BadCell {
                    column,
                    value: cell.to_string(),
                })
        };

        Ok(DocumentRecord {
            file_name: cells[0].clone(),
            doc_ref: cells[1].clone(),
            title: cells[2].clone(),
            status: parse_status(&cells[3])?,
            discipline: parse_discipline(&cells[4])?,
            file_type: cells[5].clone(),
            rev_date: parse_date(&cells[6], Column::RevDate)?,
            delivery_date: parse_date(&cells[7], Column::DeliveryDate)?,
            project: cells[8].clone(),
            originator: cells[9].clone(),
            stage: cells[10].clone(),
        })
    }
}
