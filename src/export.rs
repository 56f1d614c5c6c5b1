//! Display-ordered road export.
//!
//! Lists every deduplicated road grouped by district, following a fixed
//! district order that has nothing to do with counts. Roads in districts
//! missing from the order are left out, and a district listed twice is
//! emitted once, at its first position.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::Result;
use crate::record::Record;
use crate::store::RecordStore;

/// One road as consumed by the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub district: String,
    pub road: String,
    pub province: String,
    pub info: String,
}

impl From<&Record> for ExportEntry {
    fn from(record: &Record) -> Self {
        Self {
            district: record.district().to_string(),
            road: record.road_name().to_string(),
            province: record.province().to_string(),
            info: record.note().to_string(),
        }
    }
}

/// Deduplicated roads in `district_order`, source order within each district
pub fn ordered_export(store: &RecordStore, district_order: &[String]) -> Vec<ExportEntry> {
    let roads = store.deduplicated();
    let districts: IndexSet<&str> = district_order.iter().map(String::as_str).collect();

    districts
        .into_iter()
        .flat_map(|district| {
            roads
                .iter()
                .filter(move |record| record.district() == district)
                .map(|record| ExportEntry::from(*record))
        })
        .collect()
}

/// Output layout for [`ordered_export`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Object-literal array with bare keys, ready to paste into a front end
    #[default]
    Literal,
    /// JSON array
    Json,
}

fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

/// Writes entries as an object-literal array
pub struct LiteralWriter<W: Write> {
    writer: W,
}

impl<W: Write> LiteralWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the whole array and flush
    pub fn write_all(&mut self, entries: &[ExportEntry]) -> Result<()> {
        writeln!(self.writer, "[")?;
        for (i, entry) in entries.iter().enumerate() {
            let comma = if i + 1 < entries.len() { "," } else { "" };
            writeln!(self.writer, "  {{")?;
            writeln!(self.writer, "    district: \"{}\",", escape(&entry.district))?;
            writeln!(self.writer, "    road: \"{}\",", escape(&entry.road))?;
            writeln!(self.writer, "    province: \"{}\",", escape(&entry.province))?;
            writeln!(self.writer, "    info: \"{}\",", escape(&entry.info))?;
            writeln!(self.writer, "  }}{}", comma)?;
        }
        writeln!(self.writer, "]")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes entries as a JSON array, one element per line
pub struct JsonArrayWriter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonArrayWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Append one entry; the opening bracket goes out with the first
    pub fn push(&mut self, entry: &ExportEntry) -> Result<()> {
        let lead = if self.written == 0 { "[\n" } else { ",\n" };
        self.writer.write_all(lead.as_bytes())?;
        serde_json::to_writer(&mut self.writer, entry)?;
        self.written += 1;
        Ok(())
    }

    /// Close the array and flush, returning the number of entries written
    pub fn finish(mut self) -> Result<usize> {
        let tail = if self.written == 0 { "[]\n" } else { "\n]\n" };
        self.writer.write_all(tail.as_bytes())?;
        self.writer.flush()?;
        Ok(self.written)
    }
}

/// Write `entries` to `writer` in `format`
pub fn write_export<W: Write>(entries: &[ExportEntry], format: ExportFormat, writer: W) -> Result<()> {
    match format {
        ExportFormat::Literal => LiteralWriter::new(writer).write_all(entries),
        ExportFormat::Json => {
            let mut json = JsonArrayWriter::new(writer);
            for entry in entries {
                json.push(entry)?;
            }
            json.finish().map(|_| ())
        }
    }
}
