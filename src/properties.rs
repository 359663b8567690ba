//! Line-oriented `key = value` reading and writing.
//!
//! The format is deliberately small: comment lines start with `#`, blank
//! lines are skipped, everything else must be `key = value`. A literal `=`
//! inside a key is escaped as `\=` on write and unescaped on read;
//! whitespace around the separator is insignificant on read.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{PropsError, Result};

/// Escape a property key for writing (`=` becomes `\=`)
pub fn escape_key(key: &str) -> String {
    key.replace('=', "\\=")
}

/// Find the first `=` in a data line that is not preceded by a backslash
fn separator_index(line: &str) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        match c {
            '\\' => escaped = !escaped,
            '=' if !escaped => return Some(i),
            _ => escaped = false,
        }
    }
    None
}

/// Parse properties text into a key/value table.
///
/// `path` is only used to label parse errors. A data line with no
/// unescaped `=` is fatal; there is no partial recovery of bad lines.
pub fn parse(content: &str, path: &Path) -> Result<HashMap<String, String>> {
    let mut table = HashMap::new();
    for (number, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(at) = separator_index(line) else {
            return Err(PropsError::PropertiesParse {
                path: path.to_path_buf(),
                line: number + 1,
                reason: "expected 'key = value'".to_string(),
            });
        };
        let key = line[..at].trim().replace("\\=", "=");
        if key.is_empty() {
            return Err(PropsError::PropertiesParse {
                path: path.to_path_buf(),
                line: number + 1,
                reason: "empty property key".to_string(),
            });
        }
        let value = line[at + 1..].trim().to_string();
        table.insert(key, value);
    }
    Ok(table)
}

/// Render a key/value table as properties text, keys sorted for
/// deterministic output.
pub fn store(table: &HashMap<String, String>) -> String {
    let mut keys: Vec<&String> = table.keys().collect();
    keys.sort();
    let mut out = String::new();
    for key in keys {
        if let Some(value) = table.get(key) {
            out.push_str(&escape_key(key));
            out.push_str(" = ");
            out.push_str(value);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse_ok(content: &str) -> HashMap<String, String> {
        parse(content, &PathBuf::from("test.properties")).unwrap()
    }

    #[test]
    fn test_parse_basic() {
        let table = parse_ok("greeting = Hello\nfarewell=Goodbye\n");
        assert_eq!(table.get("greeting"), Some(&"Hello".to_string()));
        assert_eq!(table.get("farewell"), Some(&"Goodbye".to_string()));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let table = parse_ok("# header\n\n  # indented comment\nkey = value\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("key"), Some(&"value".to_string()));
    }

    #[test]
    fn test_parse_whitespace_insignificant() {
        let table = parse_ok("  spaced   =   trimmed value  \n");
        assert_eq!(table.get("spaced"), Some(&"trimmed value".to_string()));
    }

    #[test]
    fn test_escaped_separator_in_key() {
        let table = parse_ok("a\\=b = c\n");
        assert_eq!(table.get("a=b"), Some(&"c".to_string()));
    }

    #[test]
    fn test_escape_round_trip() {
        let mut table = HashMap::new();
        table.insert("a=b".to_string(), "c".to_string());
        let text = store(&table);
        assert_eq!(text, "a\\=b = c\n");
        assert_eq!(parse_ok(&text), table);
    }

    #[test]
    fn test_value_keeps_separators() {
        let table = parse_ok("formula = a=b\n");
        assert_eq!(table.get("formula"), Some(&"a=b".to_string()));
    }

    #[test]
    fn test_malformed_line_is_fatal() {
        let err = parse("no separator here\n", &PathBuf::from("bad.properties"));
        match err {
            Err(crate::error::PropsError::PropertiesParse { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_store_sorted() {
        let mut table = HashMap::new();
        table.insert("b".to_string(), "2".to_string());
        table.insert("a".to_string(), "1".to_string());
        assert_eq!(store(&table), "a = 1\nb = 2\n");
    }
}
