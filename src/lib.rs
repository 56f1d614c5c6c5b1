//! # Placeways: statistics over place-named roads
//!
//! Placeways reads a markdown table of roads named after other places
//! (district, road, source province, place, note), deduplicates it by road
//! name and computes a family of rollups over the result.
//!
//! ## Pipeline
//!
//! ```text
//! text -> TableParser -> RecordStore -> aggregate::* -> ReportComposer / export
//! ```
//!
//! - **Parsing** is positional and tolerant: rows with too few cells are
//!   skipped without error.
//! - **Deduplication** keys on the road name alone; the first occurrence wins.
//! - **Rollups** (district, province, macro-region, note keywords, road
//!   suffix, place-name category, cross-tabulation) all read the
//!   deduplicated set.
//! - **Category tables** are immutable [`CategoryTables`] values; the
//!   built-in ones can be overridden from YAML.
//!
//! ## Example
//!
//! ```ignore
//! use placeways::{analyze, AnalysisConfig, ReportComposer};
//!
//! let config = AnalysisConfig::default();
//! let text = placeways::fs_utils::read_source("by_district/all.md")?;
//! let analysis = analyze(&text, &config)?;
//! println!("{}", ReportComposer::new(&config.display.title).compose(&analysis));
//! ```

// Core modules
pub mod error;
pub mod record;
pub mod parser;
pub mod store;
pub mod config;

// Rollups and pipeline
pub mod aggregate;
pub mod analysis;

// Output
pub mod report;
pub mod export;
pub mod fs_utils;

// Re-export key types
pub use error::{AnalysisError, Result};
pub use record::{Field, Record};
pub use parser::{ParseOutcome, ParserConfig, TableParser};
pub use store::{Counts, DuplicateEntry, RecordStore, Subset};
pub use config::{AnalysisConfig, CategoryTables, DisplayConfig, Highlights};
pub use analysis::{analyze, Analysis};
pub use report::ReportComposer;
pub use export::{ordered_export, write_export, ExportEntry, ExportFormat};
