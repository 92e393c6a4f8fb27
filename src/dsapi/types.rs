//! Request and response types for DSAPI calls

use crate::error::SearchError;
use std::collections::HashMap;

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Request body types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// `application/x-www-form-urlencoded`, fields sent in order
    Form(Vec<(String, String)>),
}

/// HTTP request to be made against the upstream
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// URL to request
    pub url: String,
    /// HTTP method
    pub method: HttpMethod,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Request body
    pub data: Option<RequestBody>,
}

impl ApiRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Get,
            headers: HashMap::new(),
            data: None,
        }
    }

    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: HttpMethod::Post,
            headers: HashMap::new(),
            data: None,
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add form data
    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.data = Some(RequestBody::Form(fields));
        self
    }
}

/// HTTP response from the upstream
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl ApiResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, SearchError> {
        Ok(serde_json::from_str(&self.text)?)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, text: &str) -> ApiResponse {
        ApiResponse {
            status,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_builders() {
        let request = ApiRequest::post("http://localhost/records")
            .header("Accept", "application/json")
            .form(vec![("rows".to_string(), "10".to_string())]);
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.headers.len(), 1);
        assert_eq!(
            request.data,
            Some(RequestBody::Form(vec![("rows".to_string(), "10".to_string())]))
        );

        let request = ApiRequest::get("http://localhost/fields");
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.data.is_none());
    }

    #[test]
    fn test_success_range() {
        assert!(response(200, "").is_success());
        assert!(response(204, "").is_success());
        assert!(!response(301, "").is_success());
        assert!(!response(500, "").is_success());
    }

    #[test]
    fn test_json_error_is_transport() {
        let err = response(200, "<html>").json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, SearchError::Transport(_)));
    }
}
