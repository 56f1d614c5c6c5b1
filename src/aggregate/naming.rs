//! Naming-pattern rollups: road suffix types, road-name length, place-name geo categories.

use crate::aggregate::presence_count;
use crate::config::CategoryTables;
use crate::record::Field;
use crate::store::{Counts, RecordStore};

/// Suffix category of one road name.
///
/// Markers are tried in order and the first one contained in the name wins;
/// a name matching none falls into `other_label`.
pub fn classify_road<'a>(road_name: &str, tables: &'a CategoryTables) -> &'a str {
    tables
        .road_suffixes
        .iter()
        .find(|marker| road_name.contains(marker.as_str()))
        .map(String::as_str)
        .unwrap_or(tables.other_label.as_str())
}

/// Roads per suffix category.
///
/// Every marker and the "other" category are present, in that order, so the
/// counts always partition the deduplicated set.
pub fn road_suffix_counts(store: &RecordStore, tables: &CategoryTables) -> Counts {
    let mut counts: Counts = tables
        .road_suffixes
        .iter()
        .chain(std::iter::once(&tables.other_label))
        .map(|category| (category.clone(), 0))
        .collect();

    for record in store.deduplicated() {
        let category = classify_road(record.road_name(), tables);
        *counts.entry(category.to_string()).or_insert(0) += 1;
    }

    counts
}

/// Road-name length in characters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameLengthStats {
    pub average: f64,
    pub min: usize,
    pub max: usize,
}

/// Length statistics over the deduplicated road names; `None` when there are none
pub fn name_length_stats(store: &RecordStore) -> Option<NameLengthStats> {
    let lengths: Vec<usize> = store
        .deduplicated()
        .into_iter()
        .map(|record| record.road_name().chars().count())
        .collect();

    let min = *lengths.iter().min()?;
    let max = *lengths.iter().max()?;
    let average = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

    Some(NameLengthStats { average, min, max })
}

/// Place names per geo category, counting each road at most once per category
pub fn place_category_counts(store: &RecordStore, tables: &CategoryTables) -> Counts {
    let records = store.deduplicated();

    tables
        .place_categories
        .iter()
        .map(|(category, triggers)| {
            let count = presence_count(records.iter().copied(), Field::PlaceName, triggers);
            (category.clone(), count)
        })
        .collect()
}
