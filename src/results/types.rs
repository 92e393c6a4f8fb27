//! Result envelope definitions

use crate::dsapi::Records;
use crate::error::SearchError;
use serde::Serialize;
use serde_json::Value;

/// Outcome of one search, success or failure.
///
/// When `error` is set, `records` is empty and `total_found` is 0. The
/// constructors are the only way this type is built inside the crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Upstream documents, unvalidated
    #[serde(rename = "results")]
    pub records: Vec<Value>,
    /// Upstream match count, may exceed `records.len()`
    #[serde(rename = "total")]
    pub total_found: u64,
    /// Number of records returned
    #[serde(rename = "shown")]
    pub shown_count: usize,
    /// Criteria string sent upstream
    #[serde(rename = "query")]
    pub source_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<SearchError>,
}

impl SearchResult {
    /// Successful result from normalized records
    pub fn from_records(source_query: impl Into<String>, records: Records) -> Self {
        Self {
            shown_count: records.docs.len(),
            records: records.docs,
            total_found: records.total_found,
            source_query: source_query.into(),
            error: None,
        }
    }

    /// Failed result carrying a classified error
    pub fn failure(source_query: impl Into<String>, error: SearchError) -> Self {
        Self {
            records: Vec::new(),
            total_found: 0,
            shown_count: 0,
            source_query: source_query.into(),
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
