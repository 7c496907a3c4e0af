//! View model construction: filtering, grouping, and expand state
//!
//! The builder is a pure function over its declared inputs. The presentation
//! layer owns [`FilterState`] and [`ExpandState`] and re-invokes the builder
//! on every input change; the grouped view is recomputed from scratch each
//! time rather than maintained incrementally, which is plenty fast at the
//! catalog's scale (tens to low hundreds of records).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{FilterState, WineRecord};

/// Bucket key for records with no varietal
pub const OTHER_VARIETAL: &str = "Other";

/// Expand/collapse state per varietal group.
///
/// Keys are namespaced by category ("red:Malbec", "white:Chardonnay") so a
/// varietal name appearing under both colors gets two independent toggles.
pub type ExpandState = BTreeMap<String, bool>;

/// One varietal group within a category bucket, records in source order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarietalGroup {
    pub varietal: String,
    pub wines: Vec<WineRecord>,
}

/// The filtered, partitioned, grouped structure consumed by rendering.
///
/// Groups within each bucket are ordered by varietal key, lexicographically
/// ascending. A record whose type is neither "red" nor "white" appears in
/// neither bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedViewModel {
    pub red: Vec<VarietalGroup>,
    pub white: Vec<VarietalGroup>,
}

/// Case-insensitive substring match against name, description, region, and
/// varietal. An empty term matches everything.
pub fn matches_search(record: &WineRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    record.name.to_lowercase().contains(&term)
        || record.description.to_lowercase().contains(&term)
        || record.region.to_lowercase().contains(&term)
        || record.varietal.to_lowercase().contains(&term)
}

/// Case-insensitive substring match against the pairings field. An empty
/// selection matches everything.
pub fn matches_pairing(record: &WineRecord, pairing: &str) -> bool {
    if pairing.is_empty() {
        return true;
    }
    record.pairings.to_lowercase().contains(&pairing.to_lowercase())
}

/// Full filter predicate: search AND pairing AND category tab
pub fn matches_filter(record: &WineRecord, filter: &FilterState) -> bool {
    matches_search(record, &filter.search_term)
        && matches_pairing(record, &filter.selected_pairing)
        && filter.active_category.allows(&record.wine_type)
}

/// Varietal bucket key for a record (empty varietal -> "Other")
pub fn varietal_key(record: &WineRecord) -> String {
    if record.varietal.is_empty() {
        OTHER_VARIETAL.to_string()
    } else {
        record.varietal.clone()
    }
}

/// Category-namespaced expand state key for a record's group
pub fn expand_key(record: &WineRecord) -> String {
    format!("{}:{}", record.wine_type, varietal_key(record))
}

/// Build the grouped view model and the updated expand state.
///
/// `refresh_expansion` is set by the caller only when the search term or
/// the selected pairing actually changed (not on category tab changes, not
/// on manual toggles). When set and at least one of the two filters is
/// non-empty, every group containing a record that matches search+pairing
/// (ignoring the category tab) is forced expanded, merging into the prior
/// state. Groups are never auto-collapsed: clearing the search leaves
/// previously expanded groups expanded, and manual toggles on groups not
/// touched by the pass keep their prior value.
pub fn build_view_model(
    records: &[WineRecord],
    filter: &FilterState,
    prev_expand: &ExpandState,
    refresh_expansion: bool,
) -> (GroupedViewModel, ExpandState) {
    let mut red: BTreeMap<String, Vec<WineRecord>> = BTreeMap::new();
    let mut white: BTreeMap<String, Vec<WineRecord>> = BTreeMap::new();

    for record in records {
        if !matches_filter(record, filter) {
            continue;
        }
        let bucket = match record.wine_type.as_str() {
            "red" => &mut red,
            "white" => &mut white,
            // Unknown category: excluded from display entirely
            _ => continue,
        };
        bucket
            .entry(varietal_key(record))
            .or_default()
            .push(record.clone());
    }

    let mut expand = prev_expand.clone();
    if refresh_expansion && (!filter.search_term.is_empty() || !filter.selected_pairing.is_empty()) {
        for record in records {
            if !matches_search(record, &filter.search_term)
                || !matches_pairing(record, &filter.selected_pairing)
            {
                continue;
            }
            match record.wine_type.as_str() {
                "red" | "white" => {
                    expand.insert(expand_key(record), true);
                }
                _ => {}
            }
        }
    }

    let view = GroupedViewModel {
        red: into_groups(red),
        white: into_groups(white),
    };
    (view, expand)
}

fn into_groups(bucket: BTreeMap<String, Vec<WineRecord>>) -> Vec<VarietalGroup> {
    // BTreeMap iteration yields keys in ascending lexicographic order
    bucket
        .into_iter()
        .map(|(varietal, wines)| VarietalGroup { varietal, wines })
        .collect()
}
