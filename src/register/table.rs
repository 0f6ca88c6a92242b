//! The in-memory table.
//!
//! Insertion order is the canonical display order. Each entry carries a
//! stable identifier from a monotonic counter; identifiers are never reused
//! within a session, so deleting one record cannot change the address of
//! another. Identifiers are process-scoped: on load they are assigned 1..n
//! in file order, which keeps them deterministic for an unchanged file.

use crate::schema::{DocumentRecord, RecordId};

use super::errors::{RegisterError, RegisterResult};

/// One row of the register: a record plus its session identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterEntry {
    pub id: RecordId,
    pub record: DocumentRecord,
}

/// Ordered collection of all records, the unit of persistence.
#[derive(Debug, Clone)]
pub struct Register {
    entries: Vec<RegisterEntry>,
    next_id: u64,
}

impl Register {
    /// An empty register.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }

    /// Builds a register from records in display order, assigning ids 1..n.
    pub fn from_records(records: Vec<DocumentRecord>) -> Self {
        let entries: Vec<RegisterEntry> = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| RegisterEntry {
                id: RecordId(index as u64 + 1),
                record,
            })
            .collect();
        let next_id = entries.len() as u64 + 1;
        Self { entries, next_id }
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[RegisterEntry] {
        &self.entries
    }

    /// The records alone, in display order. This is what gets persisted;
    /// identifiers stay in memory so the on-disk column set is fixed.
    pub fn records(&self) -> Vec<DocumentRecord> {
        self.entries.iter().map(|e| e.record.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a record by identifier.
    pub fn get(&self, id: RecordId) -> Option<&DocumentRecord> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.record)
    }

    /// Current display position of a record, if it exists.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Appends a record at the end and returns its new identifier.
    ///
    /// Validation is the caller's responsibility, performed once upstream;
    /// the table itself accepts any record.
    pub fn append(&mut self, record: DocumentRecord) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.entries.push(RegisterEntry { id, record });
        id
    }

    /// Replaces all fields of the addressed record verbatim.
    pub fn replace(&mut self, id: RecordId, record: DocumentRecord) -> RegisterResult<()> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(RegisterError::UnknownRecord(id))?;
        entry.record = record;
        Ok(())
    }

    /// Removes the addressed record; later records shift down one display
    /// position. Their identifiers do not change.
    pub fn remove(&mut self, id: RecordId) -> RegisterResult<DocumentRecord> {
        let position = self.position(id).ok_or(RegisterError::UnknownRecord(id))?;
        Ok(self.entries.remove(position).record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Discipline;
    use chrono::NaiveDate;

    fn record(doc_ref: &str) -> DocumentRecord {
        DocumentRecord {
            file_name: format!("{}.dwg", doc_ref),
            doc_ref: doc_ref.into(),
            title: "Site Plan".into(),
            status: None,
            discipline: Some(Discipline::Civil),
            file_type: "Drawing".into(),
            rev_date: None,
            delivery_date: NaiveDate::from_ymd_opt(2024, 2, 1),
            project: "Riverside Depot".into(),
            originator: "ACME Design".into(),
            stage: "Stage 2".into(),
        }
    }

    #[test]
    fn test_append_assigns_monotonic_ids() {
        let mut register = Register::new();
        let a = register.append(record("R-1"));
        let b = register.append(record("R-2"));
        assert_eq!(a, RecordId(1));
        assert_eq!(b, RecordId(2));
    }

    #[test]
    fn test_from_records_assigns_ids_in_file_order() {
        let register = Register::from_records(vec![record("R-1"), record("R-2")]);
        let ids: Vec<_> = register.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![RecordId(1), RecordId(2)]);
        assert_eq!(register.entries()[0].record.doc_ref, "R-1");
    }

    #[test]
    fn test_remove_shifts_display_positions_not_ids() {
        let mut register = Register::new();
        let first = register.append(record("R-1"));
        let second = register.append(record("R-2"));
        let third = register.append(record("R-3"));

        register.remove(first).unwrap();

        assert_eq!(register.len(), 2);
        // Former position 1 is now position 0.
        assert_eq!(register.entries()[0].record.doc_ref, "R-2");
        assert_eq!(register.entries()[0].id, second);
        assert_eq!(register.position(third), Some(1));
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut register = Register::new();
        let a = register.append(record("R-1"));
        register.remove(a).unwrap();
        let b = register.append(record("R-2"));
        assert_eq!(b, RecordId(2));
        assert!(register.get(a).is_none());
    }

    #[test]
    fn test_replace_is_verbatim() {
        let mut register = Register::new();
        let id = register.append(record("R-1"));

        // A replacement may blank required fields; the table accepts it.
        let mut edited = record("R-1");
        edited.title.clear();
        edited.delivery_date = None;
        register.replace(id, edited.clone()).unwrap();

        assert_eq!(register.get(id), Some(&edited));
    }

    #[test]
    fn test_unknown_id_rejected() {
        let mut register = Register::new();
        register.append(record("R-1"));

        let dead = RecordId(42);
        assert!(matches!(
            register.replace(dead, record("R-2")),
            Err(RegisterError::UnknownRecord(RecordId(42)))
        ));
        assert!(matches!(
            register.remove(dead),
            Err(RegisterError::UnknownRecord(RecordId(42)))
        ));
        // Table unchanged.
        assert_eq!(register.len(), 1);
    }
}
