//! cellar-cv (Catalog Viewer) - Read-only wine catalog browser
//!
//! Loads a wine CSV once at startup and serves a filterable, grouped
//! catalog view over a local web UI. The dataset is immutable for the
//! session; a load or parse failure is terminal and nothing is served.

use anyhow::Result;
use cellar_common::config::{resolve_port, resolve_source};
use cellar_cv::{build_router, loader, AppState};
use clap::Parser;
use tracing::{error, info};

/// Cellar catalog viewer service
#[derive(Parser, Debug)]
#[command(name = "cellar-cv", version)]
struct Cli {
    /// CSV source: filesystem path or http(s) URL
    #[arg(long)]
    source: Option<String>,

    /// Listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Log build identification immediately after tracing init
    info!(
        "Starting Cellar Catalog Viewer (cellar-cv) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let cli = Cli::parse();

    // CLI > env > config file > compiled default
    let source = resolve_source(cli.source.as_deref());
    let port = resolve_port(cli.port);
    info!("Catalog source: {}", source);

    // Single load per session: no retry, no partial catalog
    let catalog = match loader::load_catalog(&source).await {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("Failed to load wine catalog: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(catalog);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("cellar-cv listening on http://127.0.0.1:{}", port);
    info!("Health check: http://127.0.0.1:{}/health", port);

    axum::serve(listener, app).await?;

    Ok(())
}
