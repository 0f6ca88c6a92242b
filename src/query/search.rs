//! Keyword search.
//!
//! A record matches when any of its cells contains the keyword,
//! case-insensitively. Empty cells never match a non-empty keyword.

use crate::register::{Register, RegisterEntry};

/// Searches every field of every record for the keyword.
///
/// Matching is case-insensitive substring containment against the display
/// string of each cell. Result order is table order. An empty (or
/// whitespace-only) keyword matches everything: the full table comes back
/// unfiltered.
pub fn search<'a>(register: &'a Register, keyword: &str) -> Vec<&'a RegisterEntry> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return register.entries().iter().collect();
    }

    register
        .entries()
        .iter()
        .filter(|entry| {
            entry
                .record
                .cells()
                .iter()
                .any(|cell| cell.to_lowercase().contains(&keyword))
        })
        .collect()
}
