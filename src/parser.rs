//! Markdown table parser.
//!
//! Turns the text of a markdown-style table into [`Record`]s. Columns are
//! positional (district, road, province, place, note); header names are
//! never matched. Rows that are too short are skipped without error.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AnalysisError, Result};
use crate::record::{Field, Record};

/// Row-recognition settings for [`TableParser`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Cell delimiter; candidate rows must start with it
    pub delimiter: char,
    /// Header-row marker (the district column title)
    pub header_marker: String,
    /// Pattern for the header-divider row
    pub divider_pattern: String,
    /// Rows whose trimmed length is not above this are ignored
    pub min_row_chars: usize,
    /// Rows with fewer cells are skipped
    pub min_cells: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: '|',
            header_marker: "区域".to_string(),
            divider_pattern: r"^[\s|:\-]+$".to_string(),
            min_row_chars: 5,
            min_cells: Field::ALL.len(),
        }
    }
}

/// Result of parsing one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Records in source order
    pub records: Vec<Record>,
    /// Lines that looked like table rows, valid or not
    pub candidate_rows: usize,
}

impl ParseOutcome {
    /// Candidate rows that did not yield a record
    pub fn skipped_rows(&self) -> usize {
        self.candidate_rows - self.records.len()
    }
}

/// Parser for delimited table rows
#[derive(Debug, Clone)]
pub struct TableParser {
    config: ParserConfig,
    divider: Regex,
}

impl TableParser {
    /// Create a parser, compiling the divider pattern.
    ///
    /// # Errors
    /// Returns [`AnalysisError::Config`] if `divider_pattern` is not a valid regex.
    pub fn new(config: ParserConfig) -> Result<Self> {
        let divider = Regex::new(&config.divider_pattern).map_err(|e| {
            AnalysisError::Config(format!(
                "Invalid divider pattern '{}': {}",
                config.divider_pattern, e
            ))
        })?;

        Ok(Self { config, divider })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Whether a single line is a candidate table row
    pub fn is_candidate_row(&self, line: &str) -> bool {
        line.starts_with(self.config.delimiter)
            && (self.config.header_marker.is_empty()
                || !line.contains(self.config.header_marker.as_str()))
            && !self.divider.is_match(line)
            && line.trim().chars().count() > self.config.min_row_chars
    }

    /// Lazily yield the candidate rows of `text`, in order
    pub fn candidate_rows<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.lines().filter(move |line| self.is_candidate_row(line))
    }

    /// Split a row into trimmed cells.
    ///
    /// The empty cells produced by the enclosing delimiters are dropped.
    pub fn split_cells<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let delimiter = self.config.delimiter;
        let inner = line.trim();
        let inner = inner.strip_prefix(delimiter).unwrap_or(inner);
        let inner = inner.strip_suffix(delimiter).unwrap_or(inner);

        inner.split(delimiter).map(str::trim).collect()
    }

    /// Convert one candidate row into a record.
    ///
    /// Returns `None` for rows with too few cells or a blank required cell.
    pub fn parse_row(&self, line: &str) -> Option<Record> {
        let cells = self.split_cells(line);
        if cells.len() < self.config.min_cells.max(Field::ALL.len()) {
            return None;
        }

        let cell = |field: Field| cells[field.column_index()];
        Record::new(
            cell(Field::District),
            cell(Field::RoadName),
            cell(Field::Province),
            cell(Field::PlaceName),
            cell(Field::Note),
        )
    }

    /// Lazily yield the records of `text`
    pub fn records<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Record> + 'a {
        self.candidate_rows(text).filter_map(move |line| self.parse_row(line))
    }

    /// Parse a whole document, keeping row statistics
    pub fn parse(&self, text: &str) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        for line in self.candidate_rows(text) {
            outcome.candidate_rows += 1;
            if let Some(record) = self.parse_row(line) {
                outcome.records.push(record);
            }
        }

        debug!(
            candidate_rows = outcome.candidate_rows,
            records = outcome.records.len(),
            skipped = outcome.skipped_rows(),
            "Parsed table rows"
        );

        outcome
    }
}
