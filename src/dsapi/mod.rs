//! USPTO Data Set API module
//!
//! Request construction and response normalization for the upstream
//! `records` and `fields` routes.

mod endpoint;
mod normalize;
mod types;

pub use endpoint::DsapiEndpoint;
pub use normalize::{normalize, Records, ResponseShape};
pub use types::*;
