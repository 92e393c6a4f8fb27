//! USPTO Data Set API endpoint
//!
//! Builds requests for the `records` and `fields` routes of one dataset and
//! turns their responses into normalized records or classified errors.

use super::normalize::{normalize, Records, ResponseShape};
use super::types::{ApiRequest, ApiResponse};
use crate::config::DsapiSettings;
use crate::error::SearchError;
use crate::query::clamp_rows;
use serde_json::{json, Value};
use tracing::{debug, warn};

const ACCEPT_JSON: &str = "application/json";

/// One DSAPI dataset at a fixed version
#[derive(Debug, Clone)]
pub struct DsapiEndpoint {
    base_url: String,
    dataset: String,
    version: String,
    max_rows: u32,
}

impl DsapiEndpoint {
    pub fn new(settings: &DsapiSettings) -> Self {
        Self {
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            dataset: settings.dataset.clone(),
            version: settings.version.clone(),
            max_rows: settings.max_rows,
        }
    }

    /// Upstream cap on `rows`
    pub fn max_rows(&self) -> u32 {
        self.max_rows
    }

    pub fn records_url(&self) -> String {
        format!("{}/{}/{}/records", self.base_url, self.dataset, self.version)
    }

    pub fn fields_url(&self) -> String {
        format!("{}/{}/{}/fields", self.base_url, self.dataset, self.version)
    }

    /// Build the records search request.
    ///
    /// Field names `criteria`, `start` and `rows` are the upstream contract.
    pub fn records_request(&self, criteria: &str, rows: u64) -> ApiRequest {
        let rows = clamp_rows(rows, self.max_rows);
        ApiRequest::post(self.records_url())
            .header("Accept", ACCEPT_JSON)
            .form(vec![
                ("criteria".to_string(), criteria.to_string()),
                ("start".to_string(), "0".to_string()),
                ("rows".to_string(), rows.to_string()),
            ])
    }

    /// Build the fields metadata request
    pub fn fields_request(&self) -> ApiRequest {
        ApiRequest::get(self.fields_url()).header("Accept", ACCEPT_JSON)
    }

    /// Classify and normalize a records response
    pub fn records_response(&self, response: ApiResponse) -> Result<Records, SearchError> {
        if !response.is_success() {
            return Err(SearchError::UpstreamStatus {
                status: response.status,
                body: response.text,
            });
        }

        let body: Value = response.json()?;
        let records = normalize(body);

        match records.shape {
            ResponseShape::Unrecognized => {
                warn!("DSAPI returned a non-object body, treating as zero records")
            }
            ResponseShape::SingleObject => {
                debug!("DSAPI body has no response/docs key, wrapping as one record")
            }
            _ => {}
        }

        Ok(records)
    }

    /// Pass a fields response through, or describe why it failed
    pub fn fields_response(&self, response: ApiResponse) -> Value {
        if !response.is_success() {
            return json!({ "error": format!("Status {}", response.status) });
        }

        match response.json::<Value>() {
            Ok(body) => body,
            Err(e) => json!({ "error": e.to_string() }),
        }
    }
}

impl Default for DsapiEndpoint {
    fn default() -> Self {
        Self::new(&DsapiSettings::default())
    }
}
