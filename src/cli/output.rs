//! Table printing for register views.
//!
//! Every view (full table, search hits, filtered rows) prints through the
//! same function, with a leading `!` marker on flagged rows so documents
//! needing attention stand out on a plain terminal.

use serde_json::json;

use crate::register::RegisterEntry;
use crate::render::row_style;
use crate::schema::Column;

use super::errors::CliResult;

const REF_WIDTH: usize = 14;
const TITLE_WIDTH: usize = 28;
const STATUS_WIDTH: usize = 26;
const DISCIPLINE_WIDTH: usize = 12;

/// Prints entries as an aligned summary table.
pub fn print_entries(entries: &[&RegisterEntry]) {
    if entries.is_empty() {
        println!("(no records)");
        return;
    }

    println!(
        "  {:>4}  {:<REF_WIDTH$}  {:<TITLE_WIDTH$}  {:<STATUS_WIDTH$}  {:<DISCIPLINE_WIDTH$}  {:<10}  {}",
        "id", "Doc Ref", "Document Title", "Status", "Discipline", "Delivery", "Originator",
    );

    for entry in entries {
        let record = &entry.record;
        println!(
            "{} {:>4}  {:<REF_WIDTH$}  {:<TITLE_WIDTH$}  {:<STATUS_WIDTH$}  {:<DISCIPLINE_WIDTH$}  {:<10}  {}",
            row_style(record).marker(),
            entry.id,
            clip(&record.doc_ref, REF_WIDTH),
            clip(&record.title, TITLE_WIDTH),
            clip(&record.cell(Column::Status), STATUS_WIDTH),
            clip(&record.cell(Column::Discipline), DISCIPLINE_WIDTH),
            record.cell(Column::DeliveryDate),
            record.originator,
        );
    }
    println!("{} record(s)", entries.len());
}

/// Prints entries as a JSON array, one object per record with its id and
/// style hint alongside the fields.
pub fn print_entries_json(entries: &[&RegisterEntry]) -> CliResult<()> {
    let rows: Vec<_> = entries
        .iter()
        .map(|entry| {
            json!({
                "id": entry.id.0,
                "style": match row_style(&entry.record) {
                    crate::render::StyleHint::Flagged => "flagged",
                    crate::render::StyleHint::Normal => "normal",
                },
                "record": &entry.record,
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

/// Clips a cell to the column width, replacing the tail with ellipsis.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}
