//! HTTP client for making requests to the Data Set API

use crate::config::OutgoingSettings;
use crate::dsapi::{ApiRequest, ApiResponse, HttpMethod, RequestBody};
use crate::error::SearchError;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::warn;

/// User agent sent when none is configured
pub fn default_user_agent() -> String {
    format!("uspto-search/{}", crate::VERSION)
}

/// HTTP client wrapper with DSAPI-specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, SearchError> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self, SearchError> {
        let user_agent = settings
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent);

        let mut builder = Client::builder()
            .user_agent(user_agent)
            .pool_max_idle_per_host(settings.pool_max_idle_per_host)
            .gzip(true);

        if let Some(timeout) = settings.request_timeout {
            let timeout = Duration::try_from_secs_f64(timeout).map_err(|e| {
                SearchError::Transport(format!("invalid request timeout {timeout}: {e}"))
            })?;
            builder = builder.timeout(timeout);
        }

        // SSL verification
        if !settings.verify_ssl {
            warn!("TLS certificate and hostname verification are disabled for outgoing requests");
            builder = builder
                .danger_accept_invalid_certs(true)
                .danger_accept_invalid_hostnames(true);
        }

        let client = builder
            .build()
            .map_err(|e| SearchError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Execute a request. Single attempt, no retries.
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, SearchError> {
        let mut req_builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = request.data {
            req_builder = match body {
                RequestBody::Form(fields) => req_builder.form(&fields),
            };
        }

        let response = req_builder.send().await?;

        Self::parse_response(response).await
    }

    /// Read the whole response so the connection goes back to the pool
    async fn parse_response(response: Response) -> Result<ApiResponse, SearchError> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(ApiResponse { status, text })
    }
}
