//! Markdown report composition.
//!
//! Pure formatting: every number shown here comes from an [`Analysis`].
//! Rankings use the stable descending order from [`ranked`].

use std::fmt;

use crate::aggregate::{percentage, ranked, Leader};
use crate::analysis::Analysis;
use crate::store::RecordStore;

/// Text shown instead of a report when nothing was parsed
pub const NO_DATA: &str = "暂无数据：未解析到任何道路记录。";

fn pct(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}%", v),
        None => "n/a".to_string(),
    }
}

fn ratio(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "n/a".to_string(),
    }
}

/// Builds the markdown report for an [`Analysis`]
#[derive(Debug, Clone)]
pub struct ReportComposer {
    title: String,
}

impl ReportComposer {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }

    /// Render the full report, or the "no data" notice for an empty analysis
    pub fn compose(&self, analysis: &Analysis) -> String {
        Report {
            title: &self.title,
            analysis,
        }
        .to_string()
    }

    /// Render only the duplicate-road diagnostics
    pub fn compose_duplicates(&self, store: &RecordStore) -> String {
        DuplicateSection(store).to_string()
    }
}

struct Report<'a> {
    title: &'a str,
    analysis: &'a Analysis,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        if self.analysis.is_empty() {
            return writeln!(f, "{}", NO_DATA);
        }

        self.basic(f)?;
        self.district_ranking(f)?;
        self.province_ranking(f)?;
        self.regions(f)?;
        write!(f, "{}", DuplicateSection(self.analysis.store()))?;
        self.keywords(f)?;
        self.naming(f)?;
        self.correlation(f)?;
        self.findings(f)
    }
}

impl Report<'_> {
    fn basic(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.analysis;
        writeln!(f, "## 基础统计")?;
        writeln!(f, "- 原始数据行数：{}", a.candidate_rows)?;
        writeln!(f, "- 有效数据条数：{}", a.store().len())?;
        writeln!(f, "- 道路总数：{}条", a.total_roads())?;
        writeln!(f, "- 涉及区域：{}个", a.districts.len())?;
        writeln!(f, "- 涉及省份：{}个", a.provinces.len())?;
        writeln!(f)
    }

    fn district_ranking(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 各区道路数量排名")?;
        for (i, (district, count)) in ranked(&self.analysis.districts).into_iter().enumerate() {
            writeln!(f, "{}. {}：{}条", i + 1, district, count)?;
        }
        writeln!(f)
    }

    fn province_ranking(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 各省份使用频率排名")?;
        for (i, (province, count)) in ranked(&self.analysis.provinces).into_iter().enumerate() {
            writeln!(f, "{}. {}：{}次", i + 1, province, count)?;
        }
        writeln!(f)
    }

    fn regions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let regions = &self.analysis.regions;
        writeln!(f, "## 地理区域分布")?;
        for (region, count) in ranked(&regions.counts) {
            writeln!(f, "- {}：{}条 ({})", region, count, pct(regions.percentage(region)))?;
        }
        if !regions.uncovered.is_empty() {
            let names: Vec<&str> = regions.uncovered.keys().map(String::as_str).collect();
            writeln!(f, "- 未归入地理区域的省份：{}", names.join("、"))?;
        }
        writeln!(f)
    }

    fn keywords(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## 功能区域关键词统计")?;
        for (i, (category, count)) in ranked(&self.analysis.keywords).into_iter().enumerate() {
            writeln!(f, "{}. {}：{}次", i + 1, category, count)?;
        }
        writeln!(f)
    }

    fn naming(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.analysis;
        let total = a.total_roads();
        let share = |count: usize| pct(percentage(count, total));

        writeln!(f, "## 命名模式")?;
        writeln!(f, "### 道路类型分布")?;
        for (suffix, count) in ranked(&a.road_suffixes) {
            writeln!(f, "- {}：{}条 ({})", suffix, count, share(count))?;
        }

        if let Some(lengths) = &a.name_lengths {
            writeln!(f, "### 路名长度")?;
            writeln!(f, "- 平均长度：{:.1}字符", lengths.average)?;
            writeln!(f, "- 最短：{}字符", lengths.min)?;
            writeln!(f, "- 最长：{}字符", lengths.max)?;
        }

        writeln!(f, "### 地名类型")?;
        for (category, &count) in &a.place_categories {
            writeln!(f, "- {}：{}个 ({})", category, count, share(count))?;
        }
        writeln!(f)
    }

    fn correlation(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = self.analysis;
        writeln!(f, "## 区域-省份关联")?;
        writeln!(f, "### 各区域最偏好的省份")?;
        for p in &a.district_preferences {
            writeln!(
                f,
                "- {}：{} ({}/{}, {})",
                p.district,
                p.province,
                p.count,
                p.total,
                pct(p.percentage())
            )?;
        }

        writeln!(f, "### 各省份最集中的区域")?;
        for c in &a.province_concentrations {
            writeln!(
                f,
                "- {}：{} ({}/{}, {})",
                c.province,
                c.district,
                c.count,
                c.total,
                pct(c.percentage())
            )?;
        }
        writeln!(f)
    }

    fn findings(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.analysis.summary;
        let leader = |l: &Option<Leader>, unit: &str| match l {
            Some(l) => format!("{} ({}{})", l.name, l.count, unit),
            None => "n/a".to_string(),
        };

        writeln!(f, "## 核心发现")?;
        writeln!(f, "1. 道路分布最多的区域：{}", leader(&s.top_district, "条"))?;
        writeln!(f, "2. 使用频率最高的省份：{}", leader(&s.top_province, "次"))?;
        writeln!(f, "3. 平均每个区域有道路：{}条", ratio(s.roads_per_district))?;
        writeln!(f, "4. 平均每个省份被使用：{}次", ratio(s.uses_per_province))?;
        match &s.top_region {
            Some(r) => writeln!(f, "5. 最偏好的地理区域：{} ({}条, {})", r.name, r.count, pct(r.percentage))?,
            None => writeln!(f, "5. 最偏好的地理区域：n/a")?,
        }
        writeln!(f, "6. 以自然地理命名的道路：{}条", s.natural_named)?;
        writeln!(f, "7. 具有历史文化背景的道路：{}条", s.historical)
    }
}

/// Duplicate-road diagnostics over the full record set
struct DuplicateSection<'a>(&'a RecordStore);

impl fmt::Display for DuplicateSection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let duplicates = self.0.duplicates();
        let surplus: usize = duplicates.iter().map(|d| d.count() - 1).sum();

        writeln!(f, "## 重复道路")?;
        writeln!(f, "- 重复道路数量：{}", duplicates.len())?;
        writeln!(f, "- 重复条目总数：{}", surplus)?;
        writeln!(f, "- 去重后道路总数：{}", self.0.distinct_len())?;

        for entry in &duplicates {
            writeln!(f, "### {}（{}次）", entry.road_name, entry.count())?;
            for record in &entry.records {
                writeln!(
                    f,
                    "- {} | {} | {}",
                    record.district(),
                    record.province(),
                    record.place_name()
                )?;
            }
        }
        writeln!(f)
    }
}
