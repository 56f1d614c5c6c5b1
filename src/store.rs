//! In-memory record store.
//!
//! Holds the parsed records in source order and the road-name index used for
//! duplicate detection and deduplication. The store is built once and is
//! read-only afterwards.

use indexmap::IndexMap;
use tracing::info;

use crate::record::{Field, Record};

/// Frequency mapping in first-seen order
pub type Counts = IndexMap<String, usize>;

/// Which records a query runs over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subset {
    /// Every parsed record, duplicates included
    All,
    /// First occurrence per road name
    Deduplicated,
}

/// A road name listed more than once, with every conflicting record
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateEntry<'a> {
    pub road_name: &'a str,
    pub records: Vec<&'a Record>,
}

impl DuplicateEntry<'_> {
    pub fn count(&self) -> usize {
        self.records.len()
    }
}

/// Ordered record set with derived road-name indices
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    /// road_name -> positions in `records`, in source order
    by_road: IndexMap<String, Vec<usize>>,
}

impl RecordStore {
    /// Build a store. Never fails; empty input gives an empty store.
    pub fn build(records: Vec<Record>) -> Self {
        let mut by_road: IndexMap<String, Vec<usize>> = IndexMap::new();
        for (position, record) in records.iter().enumerate() {
            by_road
                .entry(record.road_name().to_string())
                .or_default()
                .push(position);
        }

        info!(
            records = records.len(),
            distinct_roads = by_road.len(),
            "Built record store"
        );

        Self { records, by_road }
    }

    /// Every record as parsed, duplicates included
    pub fn all(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct road names
    pub fn distinct_len(&self) -> usize {
        self.by_road.len()
    }

    /// One record per road name, the first occurrence, in source order
    pub fn deduplicated(&self) -> Vec<&Record> {
        // by_road is keyed in first-seen order, so its first positions are ascending
        self.by_road
            .values()
            .filter_map(|positions| positions.first())
            .map(|&position| &self.records[position])
            .collect()
    }

    /// Records of the chosen subset, in source order
    pub fn records(&self, subset: Subset) -> Vec<&Record> {
        match subset {
            Subset::All => self.records.iter().collect(),
            Subset::Deduplicated => self.deduplicated(),
        }
    }

    /// Road names listed more than once.
    ///
    /// Ordered by descending count; equal counts keep first-seen order.
    pub fn duplicates(&self) -> Vec<DuplicateEntry<'_>> {
        let mut entries: Vec<DuplicateEntry<'_>> = self
            .by_road
            .iter()
            .filter(|(_, positions)| positions.len() > 1)
            .map(|(road_name, positions)| DuplicateEntry {
                road_name: road_name.as_str(),
                records: positions.iter().map(|&p| &self.records[p]).collect(),
            })
            .collect();

        entries.sort_by(|a, b| b.count().cmp(&a.count()));
        entries
    }

    /// Duplicate road names mapped to their counts, same order as [`duplicates`](Self::duplicates)
    pub fn duplicate_counts(&self) -> Counts {
        self.duplicates()
            .into_iter()
            .map(|entry| (entry.road_name.to_string(), entry.count()))
            .collect()
    }

    /// Count records of `subset` by the value of `field`, in first-seen order
    pub fn group_by(&self, subset: Subset, field: Field) -> Counts {
        count_by(self.records(subset), field)
    }

    /// Nested counts: `outer` value -> (`inner` value -> count), first-seen order at both levels
    pub fn cross_group(&self, subset: Subset, outer: Field, inner: Field) -> IndexMap<String, Counts> {
        let mut table: IndexMap<String, Counts> = IndexMap::new();
        for record in self.records(subset) {
            *table
                .entry(record.get(outer).to_string())
                .or_default()
                .entry(record.get(inner).to_string())
                .or_insert(0) += 1;
        }
        table
    }
}

/// Count `records` by the value of `field`, in first-seen order
pub fn count_by<'a, I>(records: I, field: Field) -> Counts
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut counts = Counts::new();
    for record in records {
        *counts.entry(record.get(field).to_string()).or_insert(0) += 1;
    }
    counts
}
