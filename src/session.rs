//! Editing-session state for the interactive surface.
//!
//! "Which record is being edited" is UI state, not table state: it lives
//! here, outside the register, and is never persisted. The machine has two
//! states, Idle and Editing(id); an edit request moves Idle to Editing, and
//! save-or-cancel moves back to Idle.

use crate::schema::RecordId;

/// Session-scoped editing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditSession {
    /// No edit in progress.
    #[default]
    Idle,
    /// The addressed record's fields are being collected.
    Editing(RecordId),
}

impl EditSession {
    /// Begins editing the given record. Replaces any edit already in
    /// progress; only one record is edited at a time.
    pub fn begin(&mut self, id: RecordId) {
        *self = EditSession::Editing(id);
    }

    /// Ends the edit (save or cancel both land here).
    pub fn finish(&mut self) {
        *self = EditSession::Idle;
    }

    /// The record currently being edited, if any.
    pub fn editing(&self) -> Option<RecordId> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing(id) => Some(*id),
        }
    }
}
