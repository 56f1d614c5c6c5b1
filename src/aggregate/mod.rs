//! Rollups over the record store.
//!
//! Every aggregator is a pure function of the store (and, where needed, the
//! category tables). All of them run over the deduplicated record set; only
//! duplicate detection, which lives on [`RecordStore`](crate::store::RecordStore)
//! itself, looks at the full set.
//!
//! Two counting semantics are in use and are kept apart on purpose:
//! - occurrence counting ([`keyword`]): every substring match counts,
//!   repeats within one note included;
//! - presence counting ([`naming::place_category_counts`], [`summary`]):
//!   a record counts at most once per category.

pub mod crosstab;
pub mod frequency;
pub mod keyword;
pub mod naming;
pub mod region;
pub mod summary;

pub use crosstab::{district_preferences, province_concentrations, DistrictPreference, ProvinceConcentration};
pub use frequency::{district_counts, province_counts};
pub use keyword::{count_occurrences, keyword_occurrences};
pub use naming::{classify_road, name_length_stats, place_category_counts, road_suffix_counts, NameLengthStats};
pub use region::{region_distribution, RegionDistribution};
pub use summary::{summarize, Leader, Summary};

use crate::record::{Field, Record};
use crate::store::Counts;

/// Entries of `counts` by descending count.
///
/// The sort is stable, so equal counts keep first-seen order.
pub fn ranked(counts: &Counts) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts.iter().map(|(k, &v)| (k.as_str(), v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

/// Highest-count entry; ties go to the first seen
pub fn top_entry(counts: &Counts) -> Option<(&str, usize)> {
    ranked(counts).into_iter().next()
}

/// `part / total` as a percentage, `None` when `total` is zero
pub fn percentage(part: usize, total: usize) -> Option<f64> {
    if total == 0 {
        None
    } else {
        Some(part as f64 / total as f64 * 100.0)
    }
}

/// Number of records whose `field` contains at least one of `triggers`
pub fn presence_count<'a, I>(records: I, field: Field, triggers: &[String]) -> usize
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter(|record| {
            let value = record.get(field);
            triggers.iter().any(|t| value.contains(t.as_str()))
        })
        .count()
}
