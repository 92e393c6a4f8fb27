//! Results module
//!
//! The envelope returned to every caller of a search.

mod types;

pub use types::SearchResult;
