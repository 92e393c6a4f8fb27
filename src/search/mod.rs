//! Search module
//!
//! Composes the query builder and the DSAPI transport into one call.

mod executor;

pub use executor::Search;
