//! HTTP networking module
//!
//! Provides the HTTP client used for Data Set API requests.

mod client;

pub use client::{default_user_agent, HttpClient};
