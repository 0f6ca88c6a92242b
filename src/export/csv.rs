//! CSV export.
//!
//! The artifact is the store's own serialization of the table, byte for
//! byte: header row in the fixed column order, one row per record. Loading
//! the artifact back through the store reproduces the table exactly.

use crate::register::Register;
use crate::store::writer;

/// Serializes the register to CSV bytes.
pub fn to_csv(register: &Register) -> Vec<u8> {
    writer::serialize(&register.records())
}
