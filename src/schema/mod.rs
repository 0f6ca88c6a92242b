//! Record schema: the fixed column set, controlled vocabularies, and
//! create-time validation rules.

pub mod errors;
pub mod types;
pub mod validator;

pub use errors::{RowError, ValidationError};
pub use types::{Column, Discipline, DocumentRecord, RecordId, Status, DATE_FORMAT};
pub use validator::validate;
