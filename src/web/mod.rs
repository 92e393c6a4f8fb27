//! Web server module
//!
//! Provides the search page and the JSON search API.

mod handlers;
mod routes;
mod state;
mod templates;

pub use handlers::SearchBody;
pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
