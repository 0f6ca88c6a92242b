//! docreg - a write-through document register for controlled project
//! documents.
//!
//! The register is an ordered in-memory table of document metadata rows,
//! loaded once from a flat CSV file and flushed back through on every
//! mutation. On top of it sit keyword search, structured filters, a row
//! styling rule, and CSV/PDF exporters.

pub mod cli;
pub mod export;
pub mod observability;
pub mod query;
pub mod register;
pub mod render;
pub mod schema;
pub mod session;
pub mod store;
