//! Full catalog listing
//!
//! Used by the UI for diagnostics and by anything that wants the raw
//! normalized record set without filtering or grouping applied.

use axum::{extract::State, Json};
use cellar_common::model::WineRecord;
use serde::Serialize;

use crate::AppState;

/// Catalog response: every normalized record, in source order
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub total_records: usize,
    pub records: Vec<WineRecord>,
}

/// GET /api/catalog
pub async fn get_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        total_records: state.catalog.len(),
        records: state.catalog.as_ref().clone(),
    })
}
