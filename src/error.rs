//! Error types for DSAPI searches
//!
//! Every variant is resolved into a [`SearchResult`](crate::results::SearchResult)
//! at the transport boundary; none of them escape a search call.

use serde::{Serialize, Serializer};

/// Classified failure of a single search
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// No keyword left after trimming; the upstream is never contacted.
    #[error("Please provide at least one keyword")]
    EmptyInput,

    /// Upstream answered with a non-2xx status.
    #[error("API Error {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// Connection, timeout, DNS or body decoding failure.
    #[error("Error making request: {0}")]
    Transport(String),
}

impl SearchError {
    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::UpstreamStatus { .. } => "upstream_status",
            Self::Transport(_) => "transport",
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(format!("invalid JSON body: {err}"))
    }
}

// The envelope carries the display string, same as the legacy web payload.
impl Serialize for SearchError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
