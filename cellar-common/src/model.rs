//! Canonical data model for the wine catalog

use serde::{Deserialize, Serialize};

/// A normalized wine record.
///
/// Every field is always a defined string after normalization; cells that
/// are missing from the source row come through as empty strings. Records
/// are created once per load cycle and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WineRecord {
    pub name: String,
    /// Category ("red", "white", or whatever the source said), lower-cased
    /// at normalization time so downstream comparisons never case-fold.
    #[serde(rename = "type")]
    pub wine_type: String,
    pub varietal: String,
    pub sweetness: String,
    pub alcohol: String,
    pub region: String,
    pub style: String,
    /// Free-text food pairings, comma-delimited, substring-searchable
    pub pairings: String,
    pub description: String,
}

/// Category tab selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Red,
    White,
}

impl CategoryFilter {
    /// Whether a record with the given (already lower-cased) type passes
    /// the category tab.
    pub fn allows(&self, wine_type: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Red => wine_type == "red",
            CategoryFilter::White => wine_type == "white",
        }
    }
}

/// Current filter selections, owned by the presentation layer and passed
/// into the view model builder on every input change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Case-insensitive substring match against name/description/region/varietal
    #[serde(default)]
    pub search_term: String,
    #[serde(default)]
    pub active_category: CategoryFilter,
    /// Case-insensitive substring match against pairings; empty = no filter
    #[serde(default)]
    pub selected_pairing: String,
}

/// Common pairing terms offered by the UI's pairing dropdown
pub const PAIRING_TERMS: &[&str] = &[
    "BBQ",
    "Beef",
    "Cheese",
    "Chicken",
    "Duck",
    "Fish",
    "Lamb",
    "Lobster",
    "Pasta",
    "Pork",
    "Salad",
    "Seafood",
    "Spicy Food",
    "Steak",
];
