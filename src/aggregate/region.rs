//! Macro-region rollup of province counts.

use tracing::warn;

use crate::aggregate::{percentage, province_counts};
use crate::config::CategoryTables;
use crate::store::{Counts, RecordStore};

/// Roads per macro-region
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionDistribution {
    /// Every configured region in table order, zero counts included
    pub counts: Counts,
    /// Provinces present in the data but in no region
    pub uncovered: Counts,
    /// Size of the deduplicated set the percentages are taken against
    pub total: usize,
}

impl RegionDistribution {
    /// Share of `region` in percent; `None` for an empty dataset or unknown region
    pub fn percentage(&self, region: &str) -> Option<f64> {
        let count = *self.counts.get(region)?;
        percentage(count, self.total)
    }

    /// Sum over all regions
    pub fn covered(&self) -> usize {
        self.counts.values().sum()
    }
}

/// Sum province counts into their macro-regions.
///
/// A province listed under several regions counts toward each of them.
pub fn region_distribution(store: &RecordStore, tables: &CategoryTables) -> RegionDistribution {
    let provinces = province_counts(store);

    let counts: Counts = tables
        .regions
        .iter()
        .map(|(region, members)| {
            let count = members
                .iter()
                .map(|p| provinces.get(p.as_str()).copied().unwrap_or(0))
                .sum::<usize>();
            (region.clone(), count)
        })
        .collect();

    let uncovered: Counts = provinces
        .iter()
        .filter(|(province, _)| tables.region_of(province).is_none())
        .map(|(province, &count)| (province.clone(), count))
        .collect();

    if !uncovered.is_empty() {
        warn!(
            provinces = ?uncovered.keys().collect::<Vec<_>>(),
            "Provinces outside every macro-region"
        );
    }

    RegionDistribution {
        counts,
        uncovered,
        total: store.distinct_len(),
    }
}
