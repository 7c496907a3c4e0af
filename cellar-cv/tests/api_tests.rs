//! Integration tests for cellar-cv API endpoints
//!
//! Tests cover:
//! - Health endpoint
//! - Pairing list endpoint
//! - Catalog listing (normalization visible end to end)
//! - View model endpoint: filtering, grouping, expand state

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use cellar_common::normalize::{normalize_all, parse_rows};
use cellar_cv::{build_router, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot` method

const FIXTURE_CSV: &str = "\
WINE NAME,WINE COLOR,VARIETAL,SWEETNESS,ALCOHOL,MADE IN,SYTLE,FOOD PAIRING,DESCRIPTION
Test Red,Red,Malbec,Dry,13.9%,Argentina,Smooth,steak,Ripe plum and blackberry
Test White,White,Chardonnay,Dry,13.5%,California,Oaked,fish,Crisp apple and pear
Second Red,Red,Malbec,Dry,14.0%,Argentina,Smooth,BBQ,Dark cherry notes
Odd One,Ros\u{e9},Grolleau,Dry,12.0%,France,Light,salad,Pink and fruity
";

/// Test helper: Build the app over a catalog parsed from fixture CSV
fn setup_app(csv_text: &str) -> axum::Router {
    let rows = parse_rows(csv_text).expect("fixture CSV should parse");
    let state = AppState::new(normalize_all(&rows));
    build_router(state)
}

/// Test helper: Create GET request
fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Test helper: Create POST request with JSON body
fn post_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: Extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

// =============================================================================
// Health Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app(FIXTURE_CSV);

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "cellar-cv");
    assert!(body["version"].is_string());
}

// =============================================================================
// Pairing List Tests
// =============================================================================

#[tokio::test]
async fn test_pairings_endpoint() {
    let app = setup_app(FIXTURE_CSV);

    let response = app.oneshot(get_request("/api/pairings")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    let pairings = body["pairings"].as_array().unwrap();
    assert!(pairings.contains(&Value::String("Steak".to_string())));
    assert!(pairings.contains(&Value::String("Fish".to_string())));
}

// =============================================================================
// Catalog Listing Tests
// =============================================================================

#[tokio::test]
async fn test_catalog_listing_normalized() {
    let app = setup_app(FIXTURE_CSV);

    let response = app.oneshot(get_request("/api/catalog")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["total_records"], 4);

    let records = body["records"].as_array().unwrap();
    // Source order preserved; wine color case-folded at normalization
    assert_eq!(records[0]["name"], "Test Red");
    assert_eq!(records[0]["type"], "red");
    // Style populated from the misspelled SYTLE header
    assert_eq!(records[0]["style"], "Smooth");
}

// =============================================================================
// View Model Tests
// =============================================================================

#[tokio::test]
async fn test_view_default_filter_groups_and_sorts() {
    let app = setup_app(FIXTURE_CSV);

    let body = json!({
        "filter": {},
        "expand": {},
        "refresh_expansion": false
    });
    let response = app.oneshot(post_request("/api/view", &body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let view = extract_json(response.into_body()).await;

    let red = view["red"].as_array().unwrap();
    assert_eq!(red.len(), 1);
    assert_eq!(red[0]["varietal"], "Malbec");
    // Stable grouping: both Malbecs in source order
    let malbec_names: Vec<&str> = red[0]["wines"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["name"].as_str().unwrap())
        .collect();
    assert_eq!(malbec_names, vec!["Test Red", "Second Red"]);

    let white = view["white"].as_array().unwrap();
    assert_eq!(white.len(), 1);
    assert_eq!(white[0]["varietal"], "Chardonnay");

    // The rosé record appears in neither bucket
    let total_shown: usize = red
        .iter()
        .chain(white.iter())
        .map(|g| g["wines"].as_array().unwrap().len())
        .sum();
    assert_eq!(total_shown, 3);
}

#[tokio::test]
async fn test_view_category_filter_excludes_other_color() {
    let app = setup_app(FIXTURE_CSV);

    let body = json!({
        "filter": { "active_category": "white", "search_term": "test" },
        "expand": {},
        "refresh_expansion": false
    });
    let response = app.oneshot(post_request("/api/view", &body)).await.unwrap();
    let view = extract_json(response.into_body()).await;

    assert!(view["red"].as_array().unwrap().is_empty());
    let white = view["white"].as_array().unwrap();
    assert_eq!(white.len(), 1);
    assert_eq!(white[0]["wines"][0]["name"], "Test White");
}

/// End-to-end: a minimal 2-row CSV with pairing "steak" selected yields
/// only the red bucket, with one Malbec group holding "Test Red".
#[tokio::test]
async fn test_view_pairing_filter_end_to_end() {
    let csv = "\
WINE NAME,WINE COLOR,VARIETAL,FOOD PAIRING
Test Red,Red,Malbec,steak
Test White,White,Chardonnay,fish
";
    let app = setup_app(csv);

    let body = json!({
        "filter": { "selected_pairing": "steak" },
        "expand": {},
        "refresh_expansion": true
    });
    let response = app.oneshot(post_request("/api/view", &body)).await.unwrap();
    let view = extract_json(response.into_body()).await;

    assert!(view["white"].as_array().unwrap().is_empty());
    let red = view["red"].as_array().unwrap();
    assert_eq!(red.len(), 1);
    assert_eq!(red[0]["varietal"], "Malbec");
    let wines = red[0]["wines"].as_array().unwrap();
    assert_eq!(wines.len(), 1);
    assert_eq!(wines[0]["name"], "Test Red");

    // Matching group auto-expanded
    assert_eq!(view["expand"]["red:Malbec"], true);
}

#[tokio::test]
async fn test_view_expansion_merges_into_prior_state() {
    let app = setup_app(FIXTURE_CSV);

    // User manually collapsed red:Malbec; search for "cherry" matches only
    // Second Red (description), which is in that same group
    let body = json!({
        "filter": { "search_term": "cherry" },
        "expand": { "white:Chardonnay": true, "red:Malbec": false },
        "refresh_expansion": true
    });
    let response = app.oneshot(post_request("/api/view", &body)).await.unwrap();
    let view = extract_json(response.into_body()).await;

    // Matching group forced expanded; unrelated manual state untouched
    assert_eq!(view["expand"]["red:Malbec"], true);
    assert_eq!(view["expand"]["white:Chardonnay"], true);
}

#[tokio::test]
async fn test_view_without_refresh_preserves_expand_state() {
    let app = setup_app(FIXTURE_CSV);

    let body = json!({
        "filter": { "search_term": "cherry" },
        "expand": { "red:Malbec": false },
        "refresh_expansion": false
    });
    let response = app.oneshot(post_request("/api/view", &body)).await.unwrap();
    let view = extract_json(response.into_body()).await;

    assert_eq!(view["expand"]["red:Malbec"], false);
}

// =============================================================================
// UI Serving Tests
// =============================================================================

#[tokio::test]
async fn test_index_and_app_js_served() {
    let app = setup_app(FIXTURE_CSV);

    let response = app
        .clone()
        .oneshot(get_request("/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get_request("/static/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"],
        "application/javascript"
    );
}
