//! End-to-end tests for parsing, rollups, report and export

use std::fs;
use std::path::PathBuf;

use placeways::aggregate::{classify_road, ranked};
use placeways::fs_utils::read_source;
use placeways::{
    analyze, ordered_export, write_export, AnalysisConfig, AnalysisError, ExportEntry, ExportFormat,
    ReportComposer, TableParser,
};
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample.md")
}

fn fixture() -> String {
    read_source(fixture_path()).unwrap()
}

#[test]
fn test_fixture_parse_statistics() {
    let analysis = analyze(&fixture(), &AnalysisConfig::default()).unwrap();

    assert_eq!(analysis.candidate_rows, 15);
    assert_eq!(analysis.store().len(), 14);
    assert_eq!(analysis.total_roads(), 13);

    let duplicates = analysis.store().duplicates();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].road_name, "福州路");
    assert_eq!(duplicates[0].records[1].district(), "虹口区");
}

#[test]
fn test_fixture_frequencies() {
    let analysis = analyze(&fixture(), &AnalysisConfig::default()).unwrap();

    assert_eq!(analysis.districts.len(), 7);
    assert_eq!(analysis.districts["黄浦区"], 4);
    assert_eq!(analysis.districts["虹口区"], 1);
    assert_eq!(analysis.districts.values().sum::<usize>(), analysis.total_roads());

    let provinces = ranked(&analysis.provinces);
    assert_eq!(provinces[0], ("四川", 3));
    assert_eq!(provinces[1], ("上海", 3));
    assert_eq!(provinces[2], ("福建", 2));
}

#[test]
fn test_fixture_regions() {
    let analysis = analyze(&fixture(), &AnalysisConfig::default()).unwrap();
    let regions = &analysis.regions;

    assert_eq!(regions.counts["华东"], 4);
    assert_eq!(regions.counts["西南"], 4);
    assert_eq!(regions.counts["东北"], 1);
    assert_eq!(regions.counts["华中"], 1);
    assert_eq!(regions.uncovered["上海"], 3);
    assert_eq!(regions.covered() + 3, regions.total);
}

#[test]
fn test_fixture_keyword_occurrences() {
    let analysis = analyze(&fixture(), &AnalysisConfig::default()).unwrap();
    let keywords = &analysis.keywords;

    // 商业 x1 + 购物 x1 in one note, 商业 x2 in another
    assert_eq!(keywords["商业相关"], 4);
    assert_eq!(keywords["交通设施"], 3);
    assert_eq!(keywords["居住区域"], 1);
    assert_eq!(keywords["教育文化"], 2);
    assert_eq!(keywords["工业园区"], 0);
    assert_eq!(keywords["休闲娱乐"], 1);
}

#[test]
fn test_fixture_naming_patterns() {
    let analysis = analyze(&fixture(), &AnalysisConfig::default()).unwrap();
    let config = AnalysisConfig::default();

    assert_eq!(analysis.road_suffixes["路"], 11);
    assert_eq!(analysis.road_suffixes["街"], 1);
    assert_eq!(analysis.road_suffixes["道"], 1);
    assert_eq!(analysis.road_suffixes["其他"], 0);

    for record in analysis.store().deduplicated() {
        let category = classify_road(record.road_name(), &config.tables);
        assert!(analysis.road_suffixes.contains_key(category));
    }

    assert_eq!(analysis.place_categories["山脉地形"], 1);
    assert_eq!(analysis.place_categories["水系河流"], 2);
    assert_eq!(analysis.place_categories["行政区划"], 0);
    assert_eq!(analysis.place_categories["方位词汇"], 2);

    let lengths = analysis.name_lengths.unwrap();
    assert_eq!(lengths.min, 3);
    assert_eq!(lengths.max, 4);
}

#[test]
fn test_fixture_cross_tabulation() {
    let analysis = analyze(&fixture(), &AnalysisConfig::default()).unwrap();

    let huangpu = analysis
        .district_preferences
        .iter()
        .find(|p| p.district == "黄浦区")
        .unwrap();
    assert_eq!(huangpu.province, "江苏");
    assert_eq!((huangpu.count, huangpu.total), (1, 4));

    let shanghai = analysis
        .province_concentrations
        .iter()
        .find(|c| c.province == "上海")
        .unwrap();
    assert_eq!(shanghai.district, "浦东新区");
    assert_eq!((shanghai.count, shanghai.total), (2, 3));
    assert_eq!(analysis.province_concentrations.len(), 8);
}

#[test]
fn test_fixture_summary() {
    let analysis = analyze(&fixture(), &AnalysisConfig::default()).unwrap();
    let summary = &analysis.summary;

    assert_eq!(summary.top_district.as_ref().unwrap().name, "黄浦区");
    assert_eq!(summary.top_province.as_ref().unwrap().name, "四川");
    assert_eq!(summary.top_region.as_ref().unwrap().name, "华东");
    assert_eq!(summary.natural_named, 3);
    assert_eq!(summary.historical, 3);
}

#[test]
fn test_fixture_report() {
    let config = AnalysisConfig::default();
    let analysis = analyze(&fixture(), &config).unwrap();
    let report = ReportComposer::new(config.display.title.as_str()).compose(&analysis);

    assert!(report.starts_with("# 上海地名道路多维度数据分析报告"));
    assert!(report.contains("- 道路总数：13条"));
    assert!(report.contains("1. 黄浦区：4条"));
    assert!(report.contains("- 华东：4条 (30.8%)"));
    assert!(report.contains("### 福州路（2次）"));
    assert!(report.contains("- 虹口区 | 福建 | 福州"));
}

#[test]
fn test_fixture_export_order() {
    let config = AnalysisConfig::default();
    let analysis = analyze(&fixture(), &config).unwrap();
    let entries = ordered_export(analysis.store(), &config.display.district_order);

    assert_eq!(entries.len(), 12);
    assert_eq!(entries[0].road, "国定路");
    assert_eq!(entries[2].district, "虹口区");
    assert!(entries.iter().all(|e| e.district != "外地区"));
    assert_eq!(entries.last().map(|e| e.road.as_str()), Some("漕溪北路"));
}

#[test]
fn test_deduplicated_district_count() {
    let text = "\
| 黄浦区 | 淮海路 | 上海 | 淮海 | 商业街区 |
| 黄浦区 | 淮海路 | 上海 | 淮海 | 历史 |
";
    let analysis = analyze(text, &AnalysisConfig::default()).unwrap();

    assert_eq!(analysis.districts["黄浦区"], 1);
    assert_eq!(analysis.store().duplicate_counts()["淮海路"], 2);
}

#[test]
fn test_reparse_is_identical() {
    let parser = TableParser::new(AnalysisConfig::default().parser).unwrap();
    let text = fixture();

    assert_eq!(parser.parse(&text), parser.parse(&text));
}

#[test]
fn test_empty_file_reports_no_data() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.md");
    fs::write(&path, "").unwrap();

    let config = AnalysisConfig::default();
    let analysis = analyze(&read_source(&path).unwrap(), &config).unwrap();
    let report = ReportComposer::new("报告").compose(&analysis);

    assert!(analysis.is_empty());
    assert!(analysis.districts.is_empty());
    assert_eq!(analysis.regions.covered(), 0);
    assert!(report.contains(placeways::report::NO_DATA));
    assert!(ordered_export(analysis.store(), &config.display.district_order).is_empty());
}

#[test]
fn test_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let result = read_source(temp_dir.path().join("absent.md"));

    match result {
        Err(AnalysisError::MissingInput { path, .. }) => assert!(path.ends_with("absent.md")),
        other => panic!("expected MissingInput, got {:?}", other),
    }
}

#[test]
fn test_bundled_tables_match_defaults() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config/tables.yaml");
    let config = AnalysisConfig::load_from_file(path).unwrap();

    assert_eq!(config, AnalysisConfig::default());
}

#[test]
fn test_custom_tables_change_rollups() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("tables.yaml");
    fs::write(
        &path,
        "tables:\n  regions:\n    本地: [上海]\n  road_suffixes: [街]\n",
    )
    .unwrap();

    let config = AnalysisConfig::load_from_file(&path).unwrap();
    let analysis = analyze(&fixture(), &config).unwrap();

    assert_eq!(analysis.regions.counts.len(), 1);
    assert_eq!(analysis.regions.counts["本地"], 3);
    assert_eq!(analysis.road_suffixes["街"], 1);
    assert_eq!(analysis.road_suffixes["其他"], 12);
}

#[test]
fn test_export_round_trips_through_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("roads.json");

    let config = AnalysisConfig::default();
    let analysis = analyze(&fixture(), &config).unwrap();
    let entries = ordered_export(analysis.store(), &config.display.district_order);
    write_export(&entries, ExportFormat::Json, fs::File::create(&path).unwrap()).unwrap();

    let parsed: Vec<ExportEntry> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(parsed, entries);
}

#[test]
fn test_repeated_district_in_configured_order() {
    let config = AnalysisConfig::from_yaml("display:\n  district_order: [黄浦区, 杨浦区, 黄浦区]\n").unwrap();
    let analysis = analyze(&fixture(), &config).unwrap();
    let entries = ordered_export(analysis.store(), &config.display.district_order);

    let roads: Vec<&str> = entries.iter().map(|e| e.road.as_str()).collect();
    assert_eq!(
        roads,
        vec!["南京东路", "九江路", "福州路", "四川中路", "国定路", "长白山路"]
    );
    assert!(entries.len() <= analysis.total_roads());
}

#[test]
fn test_parser_settings_change_duplicate_diagnostics() {
    let strict = AnalysisConfig::from_yaml("parser:\n  min_cells: 6\n").unwrap();
    let default = analyze(&fixture(), &AnalysisConfig::default()).unwrap();
    let analysis = analyze(&fixture(), &strict).unwrap();

    assert_eq!(default.store().duplicates().len(), 1);
    assert_eq!(analysis.candidate_rows, 15);
    assert!(analysis.store().duplicates().is_empty());

    let composer = ReportComposer::new(strict.display.title.as_str());
    assert!(composer.compose_duplicates(analysis.store()).contains("- 重复道路数量：0"));
}
