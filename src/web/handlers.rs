//! HTTP request handlers

use super::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tera::Context;

/// JSON body of a search request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchBody {
    /// Keywords, blank entries ignored
    pub keywords: Vec<String>,
    /// "AND" or "OR"
    pub operator: Option<String>,
    /// Maximum number of records: an integer, a float or a numeric string
    pub limit: Option<Value>,
}

impl SearchBody {
    /// Requested limit, or `default` when absent or not a number.
    /// Fractions are truncated and negatives become 0.
    pub fn limit_or(&self, default: u64) -> u64 {
        match self.limit.as_ref() {
            Some(Value::Number(n)) => n
                .as_u64()
                .or_else(|| n.as_i64().map(|_| 0))
                .or_else(|| n.as_f64().map(|f| f.max(0.0) as u64))
                .unwrap_or(default),
            Some(Value::String(s)) => {
                let s = s.trim();
                s.parse::<i64>()
                    .map(|l| l.max(0) as u64)
                    .ok()
                    .or_else(|| {
                        s.parse::<f64>()
                            .ok()
                            .filter(|f| f.is_finite())
                            .map(|f| f.max(0.0) as u64)
                    })
                    .unwrap_or(default)
            }
            _ => default,
        }
    }
}

/// Home page handler
pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    let mut ctx = Context::new();
    ctx.insert("instance_name", state.instance_name());
    ctx.insert("default_limit", &state.default_limit());
    ctx.insert("max_rows", &state.search.endpoint().max_rows());

    match state.templates.render_with_context("index.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

/// Search handler. Always answers 200 with the result envelope.
pub async fn search(
    State(state): State<AppState>,
    Json(body): Json<SearchBody>,
) -> impl IntoResponse {
    let operator = state.operator(body.operator.as_deref());
    let limit = body.limit_or(state.default_limit());

    let result = state.search.search(&body.keywords, operator, limit).await;
    Json(result)
}

/// Searchable fields handler
pub async fn fields(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.search.fields().await)
}

/// Health check handler
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION
    }))
}
