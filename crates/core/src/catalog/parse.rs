//! CSV text to [`RawRow`]s.

use csv::{ReaderBuilder, StringRecord, Trim};

use super::types::RawRow;
use super::CatalogError;

/// Parse catalog CSV text.
///
/// The first non-blank line is the header. Blank lines are skipped, quoted
/// fields may contain commas, and every header and value is trimmed. Short
/// rows are padded with empty strings and extra fields are ignored.
///
/// A quote opens a quoted field only at the start of a field, after any
/// leading whitespace. Quotes anywhere else are literal characters.
pub fn parse_catalog_csv(text: &str) -> Result<Vec<RawRow>, CatalogError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let text = align_opening_quotes(text)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| CatalogError::Parse {
            line: e.position().map(|p| p.line()).unwrap_or(0),
            message: e.to_string(),
        })?;

        if is_blank_line(&record) {
            continue;
        }

        match &headers {
            None => headers = Some(record.iter().map(|h| h.trim().to_string()).collect()),
            Some(headers) => rows.push(zip_row(headers, &record)),
        }
    }

    Ok(rows)
}

/// A whitespace-only line reads as one empty field. `,,` is a row.
fn is_blank_line(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(|field| field.trim().is_empty())
}

fn zip_row(headers: &[String], record: &StringRecord) -> RawRow {
    headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !header.is_empty())
        .map(|(i, header)| {
            let value = record.get(i).unwrap_or("").trim().to_string();
            (header.clone(), value)
        })
        .collect()
}

/// Drop whitespace between a field start and its opening quote, so the csv
/// reader sees the quote first. Rejects text that ends inside a quoted field.
fn align_opening_quotes(text: &str) -> Result<String, CatalogError> {
    let mut out = String::with_capacity(text.len());
    let mut line = 1;
    let mut quoted_since = None;
    let mut field_start = true;
    let mut leading = String::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if quoted_since.is_some() {
            out.push(ch);
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    out.push('"');
                    chars.next();
                }
                '"' => quoted_since = None,
                '\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match ch {
            ' ' | '\t' if field_start => leading.push(ch),
            '"' if field_start => {
                leading.clear();
                out.push(ch);
                quoted_since = Some(line);
                field_start = false;
            }
            ',' | '\n' => {
                out.push_str(&leading);
                leading.clear();
                out.push(ch);
                field_start = true;
                if ch == '\n' {
                    line += 1;
                }
            }
            _ => {
                out.push_str(&leading);
                leading.clear();
                out.push(ch);
                field_start = false;
            }
        }
    }

    if let Some(line) = quoted_since {
        return Err(CatalogError::Parse {
            line,
            message: "unterminated quoted field".to_string(),
        });
    }

    out.push_str(&leading);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_header_and_rows() {
        let text = "Name,Release Date,My Rating\nRocky,12/3/1976,5/5\nRocky II,6/15/1979,4/5\n";
        let rows = parse_catalog_csv(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Name"], "Rocky");
        assert_eq!(rows[1]["Release Date"], "6/15/1979");
        assert_eq!(rows[1]["My Rating"], "4/5");
    }

    #[test]
    fn test_trims_headers_and_values() {
        let text = " Name , Release Date \n  Rocky  ,  12/3/1976 \n";
        let rows = parse_catalog_csv(text).unwrap();
        assert_eq!(rows[0]["Name"], "Rocky");
        assert_eq!(rows[0]["Release Date"], "12/3/1976");
    }

    #[test]
    fn test_skips_blank_lines() {
        let text = "\n\nName,Release Date\n\nRocky,12/3/1976\n   \n\nRocky II,6/15/1979\n\n";
        let rows = parse_catalog_csv(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1]["Name"], "Rocky II");
    }

    #[test]
    fn test_quoted_comma_stays_in_one_field() {
        let text = "Name,Trailer\n\"Monsters, Inc.\",\"https://x.com/a,b\"\n";
        let rows = parse_catalog_csv(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["Name"], "Monsters, Inc.");
        assert_eq!(rows[0]["Trailer"], "https://x.com/a,b");
    }

    #[test]
    fn test_quoted_field_after_space_keeps_comma() {
        let text = "Name,Trailer\nRocky, \"https://x.com/a,b\"\n";
        let rows = parse_catalog_csv(text).unwrap();
        assert_eq!(rows[0]["Name"], "Rocky");
        assert_eq!(rows[0]["Trailer"], "https://x.com/a,b");
    }

    #[test]
    fn test_quote_inside_field_is_literal() {
        let text = "Name,Release Date\nThe 12\" Edition,12/3/1976\nRocky II,6/15/1979\n";
        let rows = parse_catalog_csv(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Name"], "The 12\" Edition");
        assert_eq!(rows[0]["Release Date"], "12/3/1976");
    }

    #[test]
    fn test_all_empty_fields_is_a_row() {
        let text = "Name,Release Date\n,\n   \nRocky,12/3/1976\n";
        let rows = parse_catalog_csv(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["Name"], "");
        assert_eq!(rows[1]["Name"], "Rocky");
    }

    #[test]
    fn test_short_row_is_padded() {
        let text = "Name,Release Date,Trailer\nRocky\n";
        let rows = parse_catalog_csv(text).unwrap();
        assert_eq!(rows[0]["Name"], "Rocky");
        assert_eq!(rows[0]["Release Date"], "");
        assert_eq!(rows[0]["Trailer"], "");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let text = "Name,Release Date\nRocky,12/3/1976,surplus,more\n";
        let rows = parse_catalog_csv(text).unwrap();
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[0]["Release Date"], "12/3/1976");
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "Name,Release Date\r\nRocky,12/3/1976\r\n";
        let rows = parse_catalog_csv(text).unwrap();
        assert_eq!(rows[0]["Release Date"], "12/3/1976");
    }

    #[test]
    fn test_byte_order_mark_is_stripped() {
        let text = "\u{feff}Name,Release Date\nRocky,12/3/1976\n";
        let rows = parse_catalog_csv(text).unwrap();
        assert_eq!(rows[0]["Name"], "Rocky");
    }

    #[test]
    fn test_escaped_quotes() {
        let text = "Name\n\"The \"\"Real\"\" Rocky\"\n";
        let rows = parse_catalog_csv(text).unwrap();
        assert_eq!(rows[0]["Name"], "The \"Real\" Rocky");
    }

    #[test]
    fn test_unterminated_quote_is_parse_error() {
        let text = "Name,Trailer\nRocky,\"https://x.com/a\n";
        let err = parse_catalog_csv(text).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { line: 2, .. }));
    }

    #[test]
    fn test_header_only_yields_no_rows() {
        assert!(parse_catalog_csv("Name,Release Date\n").unwrap().is_empty());
        assert!(parse_catalog_csv("").unwrap().is_empty());
    }
}
