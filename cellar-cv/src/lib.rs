//! cellar-cv library - Catalog Viewer module
//!
//! Serves the wine catalog UI and the view-model API over HTTP. The
//! catalog is loaded once at startup and immutable for the lifetime of
//! the process.

use std::sync::Arc;

use axum::Router;
use cellar_common::model::WineRecord;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod loader;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Normalized wine records, in source order (read-only)
    pub catalog: Arc<Vec<WineRecord>>,
}

impl AppState {
    /// Create new application state
    pub fn new(catalog: Vec<WineRecord>) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/catalog", get(api::get_catalog))
        .route("/api/pairings", get(api::get_pairings))
        .route("/api/view", post(api::build_view))
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
