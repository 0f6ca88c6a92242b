//! Structured filtering.
//!
//! Four criteria, mirroring the filter panel: status, discipline,
//! originator, and document reference. Each present criterion narrows by
//! exact match on its field; an absent criterion ("All") passes everything.
//! Criteria compose by AND.

use crate::register::{Register, RegisterEntry};
use crate::schema::{Discipline, DocumentRecord, Status};

/// Filter criteria. `None` on a field means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub status: Option<Status>,
    pub discipline: Option<Discipline>,
    pub originator: Option<String>,
    pub doc_ref: Option<String>,
}

impl FilterCriteria {
    /// Criteria that pass every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Whether any criterion is set.
    pub fn is_narrowing(&self) -> bool {
        self != &Self::default()
    }

    /// Whether a record passes every present criterion.
    pub fn matches(&self, record: &DocumentRecord) -> bool {
        if let Some(status) = self.status {
            if record.status != Some(status) {
                return false;
            }
        }
        if let Some(discipline) = self.discipline {
            if record.discipline != Some(discipline) {
                return false;
            }
        }
        if let Some(originator) = &self.originator {
            if &record.originator != originator {
                return false;
            }
        }
        if let Some(doc_ref) = &self.doc_ref {
            if &record.doc_ref != doc_ref {
                return false;
            }
        }
        true
    }
}

/// Applies the criteria to the register, preserving table order.
pub fn filter<'a>(register: &'a Register, criteria: &FilterCriteria) -> Vec<&'a RegisterEntry> {
    register
        .entries()
        .iter()
        .filter(|entry| criteria.matches(&entry.record))
        .collect()
}
