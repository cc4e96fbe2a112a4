//! CSV parsing for spreadsheet exports.
//!
//! Rows are separated by `\n` (a `\r` right before it is dropped), fields by
//! `,`. A double quote toggles the "inside quotes" state and is never copied
//! into the field, so quoted fields may contain commas. Escaped quotes and
//! newlines inside quotes are not supported; such input is parsed best-effort.

use crate::error::{CsvError, CsvResult};

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Split a whole document into rows of fields.
///
/// A trailing newline yields a final row holding one empty field; see
/// [`is_blank_row`].
///
/// # Example
/// ```
/// use listings::parser::parse_rows;
///
/// let rows = parse_rows("id,address\n7,\"Herzl 1, Ramat Gan\"");
/// assert_eq!(rows[1], vec!["7", "Herzl 1, Ramat Gan"]);
/// ```
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    text.split('\n').map(parse_line).collect()
}

/// Split one line into fields.
pub fn parse_line(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);

    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}

/// True for rows that carry no data at all (blank lines, `,,,`).
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|field| field.is_empty())
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-8" | "iso-8859-8-i" | "windows-1255" | "cp1255" => "windows-1255".to_string(),
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode a fetched document to text.
///
/// UTF-8 (with or without BOM) is taken as-is; anything else goes through
/// encoding detection. Hebrew exports from older spreadsheet tools are
/// usually windows-1255.
pub fn decode_content(bytes: &[u8]) -> CsvResult<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(text.to_string()),
        Err(_) => {
            let encoding = detect_encoding(bytes);
            log::debug!("Document is not UTF-8, detected {}", encoding);
            decode_with(bytes, &encoding)
        }
    }
}

/// Decode bytes with an explicit encoding label.
pub fn decode_with(bytes: &[u8], label: &str) -> CsvResult<String> {
    let encoding = encoding_rs::Encoding::for_label(label.as_bytes())
        .ok_or_else(|| CsvError::Encoding(label.to_string()))?;

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(CsvError::Encoding(encoding.name().to_string()));
    }

    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_rows() {
        let rows = parse_rows("a,b,c\n1,2,3");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "b", "c"]);
        assert_eq!(rows[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_quoted_comma_stays_in_field() {
        let rows = parse_rows("id,address\n1,\"Bialik 3, Ramat Gan\"");

        assert_eq!(rows[1].len(), 2);
        assert_eq!(rows[1][1], "Bialik 3, Ramat Gan");
    }

    #[test]
    fn test_quotes_are_stripped_mid_field() {
        let fields = parse_line("a\"b,c\"d,e");

        assert_eq!(fields, vec!["ab,cd", "e"]);
    }

    #[test]
    fn test_empty_fields_kept() {
        let fields = parse_line("1,,3,");

        assert_eq!(fields, vec!["1", "", "3", ""]);
    }

    #[test]
    fn test_trailing_newline_yields_blank_row() {
        let rows = parse_rows("a,b\n1,2\n");

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2], vec![String::new()]);
        assert!(is_blank_row(&rows[2]));
        assert!(!is_blank_row(&rows[1]));
    }

    #[test]
    fn test_crlf_line_endings() {
        let rows = parse_rows("a,b\r\n1,34.74\r\n");

        assert_eq!(rows[0], vec!["a", "b"]);
        assert_eq!(rows[1], vec!["1", "34.74"]);
        assert!(is_blank_row(&rows[2]));
    }

    #[test]
    fn test_unterminated_quote_is_best_effort() {
        let fields = parse_line("1,\"open,never closed");

        assert_eq!(fields, vec!["1", "open,never closed"]);
    }

    #[test]
    fn test_hebrew_text_untouched() {
        let rows = parse_rows("כתובת,שימוש\nהגולן 5,מגורים");

        assert_eq!(rows[1], vec!["הגולן 5", "מגורים"]);
    }

    #[test]
    fn test_all_empty_row_is_blank() {
        assert!(is_blank_row(&parse_line(",,,")));
    }

    #[test]
    fn test_decode_utf8_with_bom() {
        let mut bytes = b"\xEF\xBB\xBF".to_vec();
        bytes.extend_from_slice("id,עיר".as_bytes());

        assert_eq!(decode_content(&bytes).unwrap(), "id,עיר");
    }

    #[test]
    fn test_decode_windows_1255() {
        // "שלום"
        let bytes: &[u8] = &[0xF9, 0xEC, 0xE5, 0xED];

        assert_eq!(decode_with(bytes, "windows-1255").unwrap(), "שלום");
    }

    #[test]
    fn test_decode_unknown_label() {
        let result = decode_with(b"abc", "klingon-8");

        assert!(matches!(result, Err(CsvError::Encoding(label)) if label == "klingon-8"));
    }
}
