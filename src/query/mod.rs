//! Query building module
//!
//! Turns user keywords into DSAPI criteria strings. Each keyword becomes a
//! wildcard clause over every indexed field:
//! - `*:{keyword}*` per keyword
//! - clauses flat-joined with `AND` or `OR`, no grouping
//!
//! Keywords are interpolated as-is. Lucene metacharacters are not escaped,
//! so callers can (and sometimes do) pass query syntax through.

use crate::error::SearchError;
use serde::{Deserialize, Serialize};

/// Boolean operator joining keyword clauses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Operator {
    #[default]
    And,
    Or,
}

impl Operator {
    /// Resolve a caller-supplied operator. Only "OR" (any case) selects OR;
    /// anything else, including a missing value, is AND.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.trim().eq_ignore_ascii_case("or") => Self::Or,
            _ => Self::And,
        }
    }

    /// The literal token placed between clauses
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Wildcard clause matching `keyword` as a prefix in any field
pub fn wildcard_clause(keyword: &str) -> String {
    format!("*:{}*", keyword)
}

/// Build the criteria string for a list of keywords
pub fn build_criteria<S: AsRef<str>>(keywords: &[S], operator: Operator) -> String {
    let separator = format!(" {} ", operator.as_str());
    keywords
        .iter()
        .map(|kw| wildcard_clause(kw.as_ref()))
        .collect::<Vec<_>>()
        .join(&separator)
}

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    /// Trimmed, non-empty keywords in caller order
    keywords: Vec<String>,
    /// Clause operator
    operator: Operator,
    /// Row limit, already clamped to `[1, max_rows]`
    limit: u32,
}

impl SearchRequest {
    /// Normalize caller input into a request.
    ///
    /// Blank keywords are dropped and the rest trimmed. The limit is clamped
    /// to `[1, max_rows]`. Fails with [`SearchError::EmptyInput`] when no
    /// keyword survives.
    pub fn new<I, S>(
        keywords: I,
        operator: Operator,
        limit: u64,
        max_rows: u32,
    ) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|kw| kw.as_ref().trim().to_string())
            .filter(|kw| !kw.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(SearchError::EmptyInput);
        }

        Ok(Self {
            keywords,
            operator,
            limit: clamp_rows(limit, max_rows),
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Criteria string for this request
    pub fn criteria(&self) -> String {
        build_criteria(&self.keywords, self.operator)
    }
}

/// Clamp a requested row count into `[1, max_rows]`
pub fn clamp_rows(requested: u64, max_rows: u32) -> u32 {
    let max_rows = max_rows.max(1);
    requested.clamp(1, u64::from(max_rows)) as u32
}
