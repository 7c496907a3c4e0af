//! Catalog loading: source retrieval, CSV decode, normalization
//!
//! One load per session lifetime. A single failed attempt surfaces
//! immediately to the caller and halts startup; a partial dataset is
//! never served.

use cellar_common::normalize::{normalize_all, parse_rows};
use cellar_common::{Error, Result, WineRecord};
use tracing::{info, warn};

/// Fetch the source, decode the CSV, and normalize into wine records.
pub async fn load_catalog(source: &str) -> Result<Vec<WineRecord>> {
    let text = fetch_text(source).await?;
    let rows = parse_rows(&text)?;
    let records = normalize_all(&rows);

    // Records with a color other than red/white never appear in the
    // grouped view. Surface the truncation at least to the operator.
    let dropped = records
        .iter()
        .filter(|r| r.wine_type != "red" && r.wine_type != "white")
        .count();
    if dropped > 0 {
        warn!(
            "{} record(s) have a wine color other than red/white and will not be displayed",
            dropped
        );
    }

    info!("Loaded {} wine record(s) from {}", records.len(), source);
    Ok(records)
}

/// Retrieve raw CSV text from a URL or filesystem path
async fn fetch_text(source: &str) -> Result<String> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let response = reqwest::get(source)
            .await
            .map_err(|e| Error::Load(format!("request to {} failed: {}", source, e)))?;

        if !response.status().is_success() {
            return Err(Error::Load(format!(
                "{} returned HTTP {}",
                source,
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| Error::Load(format!("reading body from {} failed: {}", source, e)))
    } else {
        tokio::fs::read_to_string(source)
            .await
            .map_err(|e| Error::Load(format!("failed to read {}: {}", source, e)))
    }
}
