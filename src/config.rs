//! Category tables and display configuration.
//!
//! The lookup tables used by the aggregators are plain immutable values
//! passed in by the caller. [`AnalysisConfig::default`] carries the built-in
//! tables for Shanghai's place-named roads; a YAML file can override any
//! section of it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{AnalysisError, Result};
use crate::parser::ParserConfig;

/// Category name -> trigger strings, in declaration order
pub type TriggerTable = IndexMap<String, Vec<String>>;

/// Static lookup tables read by the aggregators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryTables {
    /// Macro-region -> member provinces
    pub regions: TriggerTable,
    /// Note keyword category -> trigger substrings (occurrence counting)
    pub note_keywords: TriggerTable,
    /// Ordered road-suffix markers; the first one contained in a road name wins
    pub road_suffixes: Vec<String>,
    /// Category for roads matching no suffix marker
    pub other_label: String,
    /// Place-name geo category -> trigger characters (presence counting)
    pub place_categories: TriggerTable,
    pub highlights: Highlights,
}

/// Triggers for the summary findings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlights {
    /// Place-name triggers marking roads named after natural geography
    pub natural_place: Vec<String>,
    /// Note triggers marking roads with a historical or cultural background
    pub historical_note: Vec<String>,
}

/// Presentation-only settings; never consulted by the aggregators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    /// Fixed district order for the export
    pub district_order: Vec<String>,
    /// Number of top provinces in the province -> district cross-tabulation
    pub top_provinces: usize,
}

/// Complete configuration for one run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub parser: ParserConfig,
    pub tables: CategoryTables,
    pub display: DisplayConfig,
}

impl AnalysisConfig {
    /// Load configuration from a YAML file.
    ///
    /// Sections missing from the file keep their built-in defaults.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Config`] if the file cannot be read or parsed.
    ///
    /// # Example
    /// ```ignore
    /// use placeways::AnalysisConfig;
    ///
    /// let config = AnalysisConfig::load_from_file("config/tables.yaml")?;
    /// println!("{} regions", config.tables.regions.len());
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path).map_err(|e| {
            AnalysisError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        Self::from_yaml(&contents)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let config: AnalysisConfig = serde_yaml::from_str(contents)
            .map_err(|e| AnalysisError::Config(format!("Failed to parse YAML: {}", e)))?;

        config.tables.validate()?;
        Ok(config)
    }
}

impl CategoryTables {
    /// Reject tables the aggregators cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.other_label.trim().is_empty() {
            return Err(AnalysisError::Config("'other_label' must not be empty".to_string()));
        }

        if self.road_suffixes.iter().any(|m| m.is_empty()) {
            return Err(AnalysisError::Config(format!(
                "Empty road suffix marker in {:?}",
                self.road_suffixes
            )));
        }

        let triggers = [
            ("note_keywords", &self.note_keywords),
            ("place_categories", &self.place_categories),
        ];
        for (table_name, categories) in triggers {
            for (category, words) in categories {
                if words.iter().any(|w| w.is_empty()) {
                    return Err(AnalysisError::Config(format!(
                        "Empty trigger in {}.{}",
                        table_name, category
                    )));
                }
            }
        }

        Ok(())
    }

    /// Macro-region containing `province`, if any
    pub fn region_of(&self, province: &str) -> Option<&str> {
        self.regions
            .iter()
            .find(|(_, provinces)| provinces.iter().any(|p| p == province))
            .map(|(region, _)| region.as_str())
    }
}

fn table(entries: &[(&str, &[&str])]) -> TriggerTable {
    entries
        .iter()
        .map(|(name, words)| {
            (
                name.to_string(),
                words.iter().map(|w| w.to_string()).collect(),
            )
        })
        .collect()
}

fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for CategoryTables {
    fn default() -> Self {
        Self {
            regions: table(&[
                ("华北", &["北京", "天津", "河北", "山西", "内蒙古"]),
                ("东北", &["辽宁", "吉林", "黑龙江"]),
                ("华东", &["江苏", "浙江", "安徽", "福建", "江西", "山东"]),
                ("华中", &["河南", "湖北", "湖南"]),
                ("华南", &["广东", "广西", "海南"]),
                ("西南", &["四川", "贵州", "云南", "西藏"]),
                ("西北", &["陕西", "甘肃", "青海", "宁夏", "新疆"]),
                ("港澳台", &["香港", "澳门", "台湾"]),
            ]),
            note_keywords: table(&[
                ("商业相关", &["商业", "商圈", "商店", "购物", "商场", "市场"]),
                ("交通设施", &["地铁", "公交", "交通", "道路", "桥梁", "站点"]),
                ("居住区域", &["居民区", "住宅", "小区", "社区", "新村"]),
                ("教育文化", &["学校", "大学", "教育", "校园", "文化", "博物馆"]),
                ("工业园区", &["工业", "企业", "厂区", "开发区", "园区"]),
                ("休闲娱乐", &["公园", "广场", "体育", "娱乐"]),
                ("餐饮美食", &["餐饮", "美食", "饭店", "餐厅", "小吃"]),
            ]),
            road_suffixes: strings(&["路", "街", "道"]),
            other_label: "其他".to_string(),
            place_categories: table(&[
                ("山脉地形", &["山", "岭", "峰", "岗", "坡"]),
                ("水系河流", &["江", "河", "湖", "海", "池", "泉"]),
                ("行政区划", &["市", "县", "区", "镇", "乡"]),
                ("方位词汇", &["东", "西", "南", "北", "中"]),
            ]),
            highlights: Highlights::default(),
        }
    }
}

impl Default for Highlights {
    fn default() -> Self {
        Self {
            natural_place: strings(&["江", "河", "山", "湖"]),
            historical_note: strings(&["历史", "文化", "古", "旧址"]),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "上海地名道路多维度数据分析报告".to_string(),
            district_order: strings(&[
                "杨浦区", "虹口区", "静安区", "宝山区", "闵行区", "普陀区", "浦东新区", "长宁区",
                "黄浦区", "徐汇区", "嘉定区", "崇明区", "奉贤区", "松江区", "金山区", "青浦区",
            ]),
            top_provinces: 10,
        }
    }
}
