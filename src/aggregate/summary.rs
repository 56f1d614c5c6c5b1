//! Headline findings derived from the other rollups.

use crate::aggregate::{district_counts, percentage, presence_count, province_counts, top_entry, RegionDistribution};
use crate::config::CategoryTables;
use crate::record::Field;
use crate::store::RecordStore;

/// A named count with its share of the deduplicated set
#[derive(Debug, Clone, PartialEq)]
pub struct Leader {
    pub name: String,
    pub count: usize,
    pub percentage: Option<f64>,
}

/// Key findings over the deduplicated set
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub top_district: Option<Leader>,
    pub top_province: Option<Leader>,
    pub top_region: Option<Leader>,
    pub roads_per_district: Option<f64>,
    pub uses_per_province: Option<f64>,
    /// Roads whose place name carries a natural-geography trigger
    pub natural_named: usize,
    /// Roads whose note carries a historical or cultural trigger
    pub historical: usize,
}

fn ratio(part: usize, whole: usize) -> Option<f64> {
    (whole > 0).then(|| part as f64 / whole as f64)
}

/// Compute the findings; an empty store yields `Summary::default()`
pub fn summarize(store: &RecordStore, tables: &CategoryTables, regions: &RegionDistribution) -> Summary {
    let total = store.distinct_len();
    if total == 0 {
        return Summary::default();
    }

    let districts = district_counts(store);
    let provinces = province_counts(store);
    let leader = |(name, count): (&str, usize)| Leader {
        name: name.to_string(),
        count,
        percentage: percentage(count, total),
    };

    let records = store.deduplicated();

    Summary {
        top_district: top_entry(&districts).map(leader),
        top_province: top_entry(&provinces).map(leader),
        top_region: top_entry(&regions.counts).map(leader),
        roads_per_district: ratio(total, districts.len()),
        uses_per_province: ratio(total, provinces.len()),
        natural_named: presence_count(
            records.iter().copied(),
            Field::PlaceName,
            &tables.highlights.natural_place,
        ),
        historical: presence_count(
            records.iter().copied(),
            Field::Note,
            &tables.highlights.historical_note,
        ),
    }
}
