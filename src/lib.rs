//! uspto-search: keyword search over the USPTO Data Set API
//!
//! Builds wildcard criteria from keywords, posts them to the DSAPI records
//! route and normalizes whatever JSON shape comes back. The web server and
//! the interactive CLI both go through [`Search`].

pub mod cli;
pub mod config;
pub mod dsapi;
pub mod error;
pub mod network;
pub mod query;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use error::SearchError;
pub use query::{build_criteria, Operator, SearchRequest};
pub use results::SearchResult;
pub use search::Search;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
