//! uspto-search web server
//!
//! Serves the search page and the JSON search API.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uspto_search::{
    config,
    search::Search,
    web::{create_router, AppState},
};

#[derive(Debug, Parser)]
#[command(name = "uspto-search", version, about = "USPTO Data Set API search server")]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration before logging so `general.debug` picks the level
    let settings = config::load_settings(args.config.as_deref())?;

    let default_level = if settings.general.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    info!("Starting uspto-search v{}", uspto_search::VERSION);
    info!(
        "Using dataset {}/{} at {}",
        settings.dsapi.dataset, settings.dsapi.version, settings.dsapi.base_url
    );

    let search = Search::from_settings(&settings)?;
    info!("HTTP client initialized");

    let addr = SocketAddr::new(
        settings.server.bind_address.parse()?,
        settings.server.port,
    );

    let state = AppState::new(settings, search)?;
    let app = create_router(state);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
