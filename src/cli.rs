//! Interactive CLI helpers
//!
//! Record formatting, input parsing and save-to-file for the
//! `uspto-search-cli` binary. Kept in the library so it can be tested
//! without a terminal.

use crate::results::SearchResult;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Fields printed first, in this order, when present
pub const PRIORITY_FIELDS: &[(&str, &str)] = &[
    ("patent_number", "Patent Number"),
    ("patent_id", "Patent ID"),
    ("publication_date", "Publication Date"),
    ("application_date", "Application Date"),
];

/// Longest string value printed before truncation
pub const MAX_VALUE_CHARS: usize = 100;

const RULE_WIDTH: usize = 70;

/// Parse a limit typed at the prompt, falling back on blank or bad input
pub fn parse_limit(input: &str, default: u64) -> u64 {
    let input = input.trim();
    if input.is_empty() {
        return default;
    }
    input.parse().unwrap_or(default)
}

/// Whether a prompt answer means yes
pub fn is_yes(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Default save file name for a set of keywords
pub fn default_save_path<S: AsRef<str>>(keywords: &[S]) -> PathBuf {
    let stem = keywords
        .iter()
        .map(|kw| kw.as_ref().trim().replace(' ', "_"))
        .collect::<Vec<_>>()
        .join("_");
    PathBuf::from(format!("uspto_search_{}.json", stem))
}

/// Write records as a pretty-printed JSON array
pub fn save_records(path: &Path, records: &[Value]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// One-line summary of a result
pub fn format_summary(result: &SearchResult) -> String {
    match result.error {
        Some(ref e) => format!("Error: {}", e),
        None => format!(
            "Found {} total records (showing {})",
            result.total_found, result.shown_count
        ),
    }
}

/// Turn a failed search into an error so the process exits non-zero.
/// An empty but successful search is not a failure.
pub fn ensure_success(result: &SearchResult) -> Result<()> {
    match result.error {
        Some(ref e) => Err(e.clone().into()),
        None => Ok(()),
    }
}

/// Render a single value, truncating long strings
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > MAX_VALUE_CHARS => {
            let truncated: String = s.chars().take(MAX_VALUE_CHARS).collect();
            format!("{}...", truncated)
        }
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Render one record, well-known fields first
pub fn format_record(index: usize, record: &Value) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "Record {}:", index);
    let _ = writeln!(out, "{}", rule);

    let Some(fields) = record.as_object() else {
        let _ = writeln!(out, "{}", format_value(record));
        return out;
    };

    for (key, label) in PRIORITY_FIELDS {
        if let Some(value) = fields.get(*key) {
            let _ = writeln!(out, "{}: {}", label, format_value(value));
        }
    }

    for (key, value) in fields {
        if PRIORITY_FIELDS.iter().any(|(k, _)| *k == key.as_str()) {
            continue;
        }
        let _ = writeln!(out, "{}: {}", key, format_value(value));
    }

    out
}

/// Render every record of a result, or a placeholder when there are none
pub fn format_records(records: &[Value]) -> String {
    if records.is_empty() {
        return "No results found.\n".to_string();
    }

    records
        .iter()
        .enumerate()
        .map(|(i, record)| format_record(i + 1, record))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsapi::{Records, ResponseShape};
    use crate::error::SearchError;
    use serde_json::json;

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("", 10), 10);
        assert_eq!(parse_limit("  25 ", 10), 25);
        assert_eq!(parse_limit("many", 10), 10);
        assert_eq!(parse_limit("-4", 10), 10);
    }

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" Y\n"));
        assert!(!is_yes("yes"));
        assert!(!is_yes(""));
    }

    #[test]
    fn test_default_save_path() {
        assert_eq!(
            default_save_path(&["machine learning"]),
            PathBuf::from("uspto_search_machine_learning.json")
        );
        assert_eq!(
            default_save_path(&["laser", "diode"]),
            PathBuf::from("uspto_search_laser_diode.json")
        );
    }

    #[test]
    fn test_priority_fields_come_first() {
        let record = json!({
            "abstract": "short",
            "patent_id": "US123",
            "patent_number": "123",
        });
        let text = format_record(1, &record);
        let number = text.find("Patent Number: 123").unwrap();
        let id = text.find("Patent ID: US123").unwrap();
        let abstract_pos = text.find("abstract: short").unwrap();
        assert!(number < id);
        assert!(id < abstract_pos);
        assert!(!text.contains("patent_id:"));
        assert!(text.contains("Record 1:"));
    }

    #[test]
    fn test_long_values_truncated() {
        let long = "x".repeat(150);
        let text = format_record(2, &json!({ "claims": long }));
        let expected = format!("claims: {}...", "x".repeat(100));
        assert!(text.contains(&expected));
        assert!(!text.contains(&"x".repeat(101)));
    }

    #[test]
    fn test_non_string_values() {
        let text = format_record(1, &json!({"count": 3, "tags": ["a"]}));
        assert!(text.contains("count: 3"));
        assert!(text.contains(r#"tags: ["a"]"#));
    }

    #[test]
    fn test_empty_records() {
        assert_eq!(format_records(&[]), "No results found.\n");
    }

    #[test]
    fn test_summary() {
        let ok = SearchResult::from_records(
            "*:a*",
            Records {
                docs: vec![json!({})],
                total_found: 7,
                shape: ResponseShape::Solr,
            },
        );
        assert_eq!(format_summary(&ok), "Found 7 total records (showing 1)");

        let failed = SearchResult::failure("", SearchError::EmptyInput);
        assert_eq!(
            format_summary(&failed),
            "Error: Please provide at least one keyword"
        );
    }

    #[test]
    fn test_ensure_success() {
        let empty = SearchResult::from_records(
            "*:a*",
            Records {
                docs: Vec::new(),
                total_found: 0,
                shape: ResponseShape::Solr,
            },
        );
        tokio_test::assert_ok!(ensure_success(&empty));

        let failed = SearchResult::failure(
            "*:a*",
            SearchError::UpstreamStatus {
                status: 503,
                body: "unavailable".into(),
            },
        );
        let err = ensure_success(&failed).unwrap_err();
        assert_eq!(err.to_string(), "API Error 503: unavailable");
        assert!(err.downcast_ref::<SearchError>().is_some());
    }

    #[test]
    fn test_save_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        let records = vec![json!({"a": 1}), json!({"b": "two"})];

        save_records(&path, &records).unwrap();

        let saved: Vec<Value> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved, records);
    }
}
