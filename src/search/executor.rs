//! Search execution

use crate::config::Settings;
use crate::dsapi::DsapiEndpoint;
use crate::error::SearchError;
use crate::network::HttpClient;
use crate::query::{Operator, SearchRequest};
use crate::results::SearchResult;
use serde_json::{json, Value};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Search executor: query building, one upstream exchange, normalization
#[derive(Clone)]
pub struct Search {
    /// HTTP client for making requests
    client: HttpClient,
    /// Upstream dataset endpoint
    endpoint: DsapiEndpoint,
}

impl Search {
    /// Create a new search executor
    pub fn new(client: HttpClient, endpoint: DsapiEndpoint) -> Self {
        Self { client, endpoint }
    }

    /// Build an executor from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self, SearchError> {
        let client = HttpClient::with_settings(&settings.outgoing)?;
        Ok(Self::new(client, DsapiEndpoint::new(&settings.dsapi)))
    }

    pub fn endpoint(&self) -> &DsapiEndpoint {
        &self.endpoint
    }

    /// Search for raw caller keywords.
    ///
    /// Blank input resolves to an `EmptyInput` failure without touching the
    /// network.
    pub async fn search<I, S>(&self, keywords: I, operator: Operator, limit: u64) -> SearchResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match SearchRequest::new(keywords, operator, limit, self.endpoint.max_rows()) {
            Ok(request) => self.execute(&request).await,
            Err(e) => {
                debug!("Rejected search request: {}", e);
                SearchResult::failure(String::new(), e)
            }
        }
    }

    /// Execute a validated request
    pub async fn execute(&self, request: &SearchRequest) -> SearchResult {
        let criteria = request.criteria();
        let start = Instant::now();

        info!(
            "Searching DSAPI with criteria '{}' (rows={})",
            criteria,
            request.limit()
        );

        let api_request = self
            .endpoint
            .records_request(&criteria, u64::from(request.limit()));

        let outcome = match self.client.execute(api_request).await {
            Ok(response) => self.endpoint.records_response(response),
            Err(e) => Err(e),
        };

        let elapsed = start.elapsed();

        match outcome {
            Ok(records) => {
                info!(
                    "DSAPI returned {} of {} records in {:?}",
                    records.docs.len(),
                    records.total_found,
                    elapsed
                );
                SearchResult::from_records(criteria, records)
            }
            Err(e) => {
                warn!(
                    kind = e.kind(),
                    status = ?e.status(),
                    "DSAPI search failed after {:?}: {}",
                    elapsed,
                    e
                );
                SearchResult::failure(criteria, e)
            }
        }
    }

    /// Fetch the searchable fields metadata
    pub async fn fields(&self) -> Value {
        let request = self.endpoint.fields_request();
        match self.client.execute(request).await {
            Ok(response) => self.endpoint.fields_response(response),
            Err(e) => {
                warn!("DSAPI fields request failed: {}", e);
                json!({ "error": e.to_string() })
            }
        }
    }
}
