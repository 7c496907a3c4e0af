//! CSV row decoding and normalization into canonical wine records

use std::collections::HashMap;

use crate::error::Result;
use crate::model::WineRecord;

/// Raw parsed row: column header -> cell value.
///
/// Ephemeral; consumed only by [`normalize_row`]. Cells absent from a
/// ragged row are simply absent from the map.
pub type RawRow = HashMap<String, String>;

/// Recognized column headers of the wine CSV format
pub const COL_NAME: &str = "WINE NAME";
pub const COL_COLOR: &str = "WINE COLOR";
pub const COL_VARIETAL: &str = "VARIETAL";
pub const COL_SWEETNESS: &str = "SWEETNESS";
pub const COL_ALCOHOL: &str = "ALCOHOL";
pub const COL_REGION: &str = "MADE IN";
/// The source format misspells this header. Reading the corrected spelling
/// would drop the column from every existing data file, so the misspelling
/// is preserved on purpose.
pub const COL_STYLE: &str = "SYTLE";
pub const COL_PAIRINGS: &str = "FOOD PAIRING";
pub const COL_DESCRIPTION: &str = "DESCRIPTION";

/// Decode CSV text into an ordered sequence of raw rows.
///
/// Header row required. Empty lines are skipped by the reader; ragged rows
/// are tolerated (short rows yield absent cells, which normalize to empty
/// strings). Unrecognized columns survive into the RawRow and are ignored
/// by normalization.
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = RawRow::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), value.to_string());
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Normalize one raw row into a canonical record.
///
/// Pure function. Every output field is a defined string; missing cells
/// become empty strings. The wine type is lower-cased here so downstream
/// comparisons are case-insensitive by construction. No validation beyond
/// presence: any string value is accepted, including empty.
pub fn normalize_row(row: &RawRow) -> WineRecord {
    WineRecord {
        name: cell(row, COL_NAME),
        wine_type: cell(row, COL_COLOR).to_lowercase(),
        varietal: cell(row, COL_VARIETAL),
        sweetness: cell(row, COL_SWEETNESS),
        alcohol: cell(row, COL_ALCOHOL),
        region: cell(row, COL_REGION),
        style: cell(row, COL_STYLE),
        pairings: cell(row, COL_PAIRINGS),
        description: cell(row, COL_DESCRIPTION),
    }
}

/// Normalize all rows, preserving source order
pub fn normalize_all(rows: &[RawRow]) -> Vec<WineRecord> {
    rows.iter().map(normalize_row).collect()
}

fn cell(row: &RawRow, header: &str) -> String {
    row.get(header).cloned().unwrap_or_default()
}
