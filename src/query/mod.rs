//! Query engine: keyword search and structured filtering over the register.
//!
//! Both operations are pure linear scans that borrow entries in display
//! order. The register is human-scale; there is no index to consult.

pub mod filters;
pub mod search;

pub use filters::{filter, FilterCriteria};
pub use search::search;
