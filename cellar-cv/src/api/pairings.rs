//! Pairing term list for the UI's food-pairing dropdown

use axum::Json;
use cellar_common::model::PAIRING_TERMS;
use serde::Serialize;

/// Pairing list response
#[derive(Debug, Serialize)]
pub struct PairingsResponse {
    pub pairings: Vec<String>,
}

/// GET /api/pairings
///
/// Returns the static list of common pairing terms. Selection filters by
/// case-insensitive substring against each record's pairings field, so
/// free-text pairings in the data still match.
pub async fn get_pairings() -> Json<PairingsResponse> {
    Json(PairingsResponse {
        pairings: PAIRING_TERMS.iter().map(|s| s.to_string()).collect(),
    })
}
