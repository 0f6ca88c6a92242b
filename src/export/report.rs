//! PDF report export.
//!
//! Fixed-layout paginated report of the current view: a title line on the
//! first page, then for each record one `"<column>: <value>"` line per
//! field with a blank separator line between records. Lines flow down the
//! page and break onto a new page automatically when the body area is
//! full.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::register::Register;
use crate::schema::Column;

use super::errors::ExportResult;

// A4 in points.
const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;
const MARGIN: i64 = 50;
const LEADING: i64 = 14;
const TITLE_SIZE: i64 = 16;
const BODY_SIZE: i64 = 10;

const REPORT_TITLE: &str = "Document Register";

struct Line {
    text: String,
    size: i64,
}

/// Lays the register out as a flat sequence of text lines.
fn layout(register: &Register) -> Vec<Line> {
    let mut lines = vec![
        Line {
            text: REPORT_TITLE.to_string(),
            size: TITLE_SIZE,
        },
        Line {
            text: String::new(),
            size: BODY_SIZE,
        },
    ];

    for entry in register.entries() {
        for column in Column::ALL {
            lines.push(Line {
                text: format!("{}: {}", column.header(), entry.record.cell(column)),
                size: BODY_SIZE,
            });
        }
        lines.push(Line {
            text: String::new(),
            size: BODY_SIZE,
        });
    }

    lines
}

/// Restricts text to the printable ASCII range the base font covers.
/// Line breaks inside a cell become spaces; anything else unprintable
/// becomes '?'.
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            ' '..='~' => c,
            _ => '?',
        })
        .collect()
}

/// Builds the paginated PDF and returns its bytes.
pub fn to_report(register: &Register) -> ExportResult<Vec<u8>> {
    let lines = layout(register);
    let lines_per_page = ((PAGE_HEIGHT - 2 * MARGIN) / LEADING) as usize;

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page_lines in lines.chunks(lines_per_page) {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("TL", vec![LEADING.into()]),
            Operation::new("Td", vec![MARGIN.into(), (PAGE_HEIGHT - MARGIN - LEADING).into()]),
        ];

        let mut current_size = 0;
        for line in page_lines {
            if line.size != current_size {
                operations.push(Operation::new("Tf", vec!["F1".into(), line.size.into()]));
                current_size = line.size;
            }
            if !line.text.is_empty() {
                operations.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(sanitize(&line.text))],
                ));
            }
            operations.push(Operation::new("T*", vec![]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Discipline, DocumentRecord, Status};
    use chrono::NaiveDate;

    fn record(doc_ref: &str) -> DocumentRecord {
        DocumentRecord {
            file_name: format!("{}.dwg", doc_ref),
            doc_ref: doc_ref.into(),
            title: "Foundation Details".into(),
            status: Some(Status::ReviseAndResubmit),
            discipline: Some(Discipline::Civil),
            file_type: "Drawing".into(),
            rev_date: None,
            delivery_date: NaiveDate::from_ymd_opt(2024, 10, 1),
            project: "Harbour Gate".into(),
            originator: "ACME Design".into(),
            stage: "Stage 4".into(),
        }
    }

    fn register_of(n: usize) -> Register {
        Register::from_records((0..n).map(|i| record(&format!("R-{}", i))).collect())
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_report_is_a_loadable_pdf() {
        let bytes = to_report(&register_of(2)).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(!doc.get_pages().is_empty());
    }

    #[test]
    fn test_empty_register_is_one_page_with_title() {
        let bytes = to_report(&Register::new()).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
        assert!(contains(&bytes, REPORT_TITLE.as_bytes()));
    }

    #[test]
    fn test_long_register_paginates() {
        // 10 records at 12 lines each overflow one body area.
        let bytes = to_report(&register_of(10)).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert!(doc.get_pages().len() >= 2);
    }

    #[test]
    fn test_report_lists_column_and_value_per_line() {
        let bytes = to_report(&register_of(1)).unwrap();
        assert!(contains(&bytes, b"Doc Ref: R-0"));
        assert!(contains(&bytes, b"Status: C - Revise and Resubmit"));
        assert!(contains(&bytes, b"Project Stage: Stage 4"));
    }

    #[test]
    fn test_sanitize_flattens_line_breaks() {
        assert_eq!(sanitize("two\nlines"), "two lines");
        assert_eq!(sanitize("caf\u{e9}"), "caf?");
    }
}
