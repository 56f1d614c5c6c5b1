//! One-shot pipeline: text -> records -> store -> rollups.

use tracing::{info, warn};

use crate::aggregate::{
    district_counts, district_preferences, keyword_occurrences, name_length_stats,
    place_category_counts, province_concentrations, province_counts, region_distribution,
    road_suffix_counts, summarize, DistrictPreference, NameLengthStats, ProvinceConcentration,
    RegionDistribution, Summary,
};
use crate::config::{AnalysisConfig, CategoryTables};
use crate::error::Result;
use crate::parser::TableParser;
use crate::store::{Counts, RecordStore};

/// Every rollup of one run, computed from a single store
#[derive(Debug, Clone)]
pub struct Analysis {
    store: RecordStore,
    /// Table rows seen by the parser, valid or not
    pub candidate_rows: usize,
    pub districts: Counts,
    pub provinces: Counts,
    pub regions: RegionDistribution,
    pub keywords: Counts,
    pub road_suffixes: Counts,
    pub name_lengths: Option<NameLengthStats>,
    pub place_categories: Counts,
    pub district_preferences: Vec<DistrictPreference>,
    pub province_concentrations: Vec<ProvinceConcentration>,
    pub summary: Summary,
}

impl Analysis {
    /// Run every aggregator over `store`.
    ///
    /// `candidate_rows` is the parser's row count for the document `store`
    /// was built from.
    pub fn compute(
        store: RecordStore,
        candidate_rows: usize,
        tables: &CategoryTables,
        top_provinces: usize,
    ) -> Self {
        let regions = region_distribution(&store, tables);
        let summary = summarize(&store, tables, &regions);

        Self {
            candidate_rows,
            districts: district_counts(&store),
            provinces: province_counts(&store),
            keywords: keyword_occurrences(&store, tables),
            road_suffixes: road_suffix_counts(&store, tables),
            name_lengths: name_length_stats(&store),
            place_categories: place_category_counts(&store, tables),
            district_preferences: district_preferences(&store),
            province_concentrations: province_concentrations(&store, top_provinces),
            regions,
            summary,
            store,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Roads after deduplication
    pub fn total_roads(&self) -> usize {
        self.store.distinct_len()
    }

    /// True when no record was parsed
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Parse `text` and run the full analysis.
///
/// An empty or record-free document is not an error: the result reports
/// [`Analysis::is_empty`] and every rollup is empty or zero.
///
/// # Errors
/// Only configuration problems (an invalid divider pattern) fail.
pub fn analyze(text: &str, config: &AnalysisConfig) -> Result<Analysis> {
    let parser = TableParser::new(config.parser.clone())?;
    let outcome = parser.parse(text);
    let store = RecordStore::build(outcome.records);
    if store.is_empty() {
        warn!("No records parsed from input");
    }

    let analysis = Analysis::compute(
        store,
        outcome.candidate_rows,
        &config.tables,
        config.display.top_provinces,
    );

    info!(
        records = analysis.store().len(),
        roads = analysis.total_roads(),
        duplicates = analysis.store().duplicates().len(),
        "Analysis complete"
    );

    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
| 区域 | 路名 | 省份 | 地名 | 相关信息 |
|---|---|---|---|---|
| 黄浦区 | 淮海路 | 上海 | 淮海 | 商业街区 |
| 黄浦区 | 淮海路 | 上海 | 淮海 | 历史 |
| 静安区 | 西藏北路 | 西藏 | 西藏 | 交通要道 |
| 静安区 | 残缺行 |
";

    #[test]
    fn test_analyze_counts_on_deduplicated_set() {
        let analysis = analyze(TABLE, &AnalysisConfig::default()).unwrap();

        assert_eq!(analysis.candidate_rows, 4);
        assert_eq!(analysis.store().len(), 3);
        assert_eq!(analysis.total_roads(), 2);
        assert_eq!(analysis.districts["黄浦区"], 1);
        assert_eq!(analysis.regions.counts["西南"], 1);
        assert_eq!(analysis.keywords["商业相关"], 1);
    }

    #[test]
    fn test_compute_keeps_parser_row_count() {
        let parser = TableParser::new(AnalysisConfig::default().parser).unwrap();
        let outcome = parser.parse(TABLE);
        let rows = outcome.candidate_rows;

        let analysis = Analysis::compute(
            RecordStore::build(outcome.records),
            rows,
            &CategoryTables::default(),
            10,
        );

        assert_eq!(analysis.candidate_rows, 4);
        assert_eq!(analysis.store().len(), 3);
    }

    #[test]
    fn test_analyze_empty_text() {
        let analysis = analyze("", &AnalysisConfig::default()).unwrap();

        assert!(analysis.is_empty());
        assert!(analysis.districts.is_empty());
        assert!(analysis.provinces.is_empty());
        assert_eq!(analysis.regions.covered(), 0);
        assert!(analysis.keywords.values().all(|&c| c == 0));
        assert!(analysis.road_suffixes.values().all(|&c| c == 0));
        assert!(analysis.name_lengths.is_none());
        assert!(analysis.district_preferences.is_empty());
        assert_eq!(analysis.summary, Summary::default());
    }
}
