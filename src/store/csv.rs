//! Fixed-dialect CSV primitives shared by the reader, the writer, and the
//! CSV exporter.
//!
//! Dialect: comma delimiter, double-quote quoting, doubled-quote escaping,
//! `\n` row terminator. Quoted fields may span lines. No options: the
//! backing file and the CSV export use exactly this dialect, which is what
//! keeps them interchangeable.

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Quotes a single field if it needs quoting: any field containing the
/// delimiter, a quote, or a line break is wrapped in quotes with embedded
/// quotes doubled.
pub fn quote_field(value: &str) -> String {
    let needs_quoting = value.contains(DELIMITER)
        || value.contains(QUOTE)
        || value.contains('\n')
        || value.contains('\r');

    if needs_quoting {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push(QUOTE);
        for c in value.chars() {
            if c == QUOTE {
                quoted.push(QUOTE);
            }
            quoted.push(c);
        }
        quoted.push(QUOTE);
        quoted
    } else {
        value.to_string()
    }
}

/// Serializes one row, without the terminator.
pub fn write_row(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| quote_field(c))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parses a full CSV text into rows of cells.
///
/// Handles quoted fields spanning lines. A trailing newline does not
/// produce an empty final row. Returns `Err` with a short reason on
/// malformed input (unterminated quote, text after a closing quote).
pub fn parse(text: &str) -> Result<Vec<Vec<String>>, String> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut cell_was_quoted = false;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    chars.next();
                    cell.push(QUOTE);
                } else {
                    in_quotes = false;
                }
            } else {
                cell.push(c);
            }
            continue;
        }

        match c {
            QUOTE if cell.is_empty() && !cell_was_quoted => {
                in_quotes = true;
                cell_was_quoted = true;
            }
            QUOTE => {
                return Err(format!("unexpected quote after cell content at row {}", rows.len() + 1));
            }
            DELIMITER => {
                row.push(std::mem::take(&mut cell));
                cell_was_quoted = false;
            }
            '\r' => {
                // Accept \r\n terminators; a bare \r is treated the same.
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(std::mem::take(&mut cell));
                rows.push(std::mem::take(&mut row));
                cell_was_quoted = false;
            }
            '\n' => {
                row.push(std::mem::take(&mut cell));
                rows.push(std::mem::take(&mut row));
                cell_was_quoted = false;
            }
            _ if cell_was_quoted => {
                return Err(format!("text after closing quote at row {}", rows.len() + 1));
            }
            _ => cell.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".to_string());
    }

    // Final row without a trailing newline.
    if !cell.is_empty() || !row.is_empty() || cell_was_quoted {
        row.push(cell);
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(row: &[&str]) -> Vec<String> {
        row.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plain_fields_unquoted() {
        assert_eq!(quote_field("Ground Floor Plan"), "Ground Floor Plan");
    }

    #[test]
    fn test_comma_forces_quotes() {
        assert_eq!(quote_field("Plans, Sections"), "\"Plans, Sections\"");
    }

    #[test]
    fn test_embedded_quotes_doubled() {
        assert_eq!(quote_field("the \"final\" issue"), "\"the \"\"final\"\" issue\"");
    }

    #[test]
    fn test_newline_forces_quotes() {
        assert_eq!(quote_field("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn test_write_then_parse_row() {
        let row = cells(&["a", "b,c", "d \"e\"", "", "f\ng"]);
        let line = write_row(&row);
        let parsed = parse(&format!("{}\n", line)).unwrap();
        assert_eq!(parsed, vec![row]);
    }

    #[test]
    fn test_parse_multiple_rows() {
        let parsed = parse("a,b\nc,d\n").unwrap();
        assert_eq!(parsed, vec![cells(&["a", "b"]), cells(&["c", "d"])]);
    }

    #[test]
    fn test_parse_crlf() {
        let parsed = parse("a,b\r\nc,d\r\n").unwrap();
        assert_eq!(parsed, vec![cells(&["a", "b"]), cells(&["c", "d"])]);
    }

    #[test]
    fn test_parse_no_trailing_newline() {
        let parsed = parse("a,b\nc,d").unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn test_quoted_field_spans_lines() {
        let parsed = parse("a,\"two\nlines\"\nb,c\n").unwrap();
        assert_eq!(parsed, vec![cells(&["a", "two\nlines"]), cells(&["b", "c"])]);
    }

    #[test]
    fn test_empty_cells_preserved() {
        let parsed = parse(",,\n").unwrap();
        assert_eq!(parsed, vec![cells(&["", "", ""])]);
    }

    #[test]
    fn test_quoted_empty_cell() {
        let parsed = parse("a,\"\",b\n").unwrap();
        assert_eq!(parsed, vec![cells(&["a", "", "b"])]);
    }

    #[test]
    fn test_unterminated_quote_is_error() {
        assert!(parse("a,\"oops\n").is_err());
    }

    #[test]
    fn test_text_after_closing_quote_is_error() {
        assert!(parse("\"a\"b,c\n").is_err());
    }
}
