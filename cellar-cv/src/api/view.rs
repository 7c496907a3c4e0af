//! View model endpoint
//!
//! The browser owns FilterState and ExpandState and re-posts them on every
//! input change; this handler runs the pure view model builder over the
//! immutable catalog and hands back the grouped view plus the updated
//! expand state.

use axum::{extract::State, Json};
use cellar_common::model::FilterState;
use cellar_common::view::{build_view_model, ExpandState, VarietalGroup};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// View request: current filter selections and expand state.
///
/// `refresh_expansion` is set by the client only when the search term or
/// selected pairing changed — not on category tab changes or manual
/// group toggles.
#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    #[serde(default)]
    pub filter: FilterState,
    #[serde(default)]
    pub expand: ExpandState,
    #[serde(default)]
    pub refresh_expansion: bool,
}

/// Grouped view response
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub red: Vec<VarietalGroup>,
    pub white: Vec<VarietalGroup>,
    pub expand: ExpandState,
}

/// POST /api/view
pub async fn build_view(
    State(state): State<AppState>,
    Json(payload): Json<ViewRequest>,
) -> Json<ViewResponse> {
    let (view, expand) = build_view_model(
        &state.catalog,
        &payload.filter,
        &payload.expand,
        payload.refresh_expansion,
    );

    Json(ViewResponse {
        red: view.red,
        white: view.white,
        expand,
    })
}
