//! placeways CLI - statistics and exports for place-named road tables
//!
//! Reads a markdown road table, then writes the analysis report, the
//! display-ordered export, or the duplicate diagnostics.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

use placeways::fs_utils::{create_file, read_source, write_file};
use placeways::{analyze, ordered_export, write_export, AnalysisConfig, ExportFormat, ReportComposer};

#[derive(Parser)]
#[command(name = "placeways")]
#[command(version, about = "Statistics over tables of place-named roads", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the markdown analysis report
    Report {
        /// Markdown file containing the road table
        #[arg(short, long)]
        input: PathBuf,

        /// Report destination (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// YAML file overriding the built-in category tables
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },

    /// Export deduplicated roads in the fixed district order
    Export {
        /// Markdown file containing the road table
        #[arg(short, long)]
        input: PathBuf,

        /// Export destination (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output layout
        #[arg(short, long, value_enum, default_value = "literal")]
        format: ExportFormat,

        /// YAML file overriding the built-in category tables
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },

    /// List road names that appear more than once
    Duplicates {
        /// Markdown file containing the road table
        #[arg(short, long)]
        input: PathBuf,

        /// YAML file overriding the built-in parser settings and tables
        #[arg(short, long)]
        tables: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Report { input, output, tables } => run_report(&input, output.as_deref(), tables.as_deref()),
        Commands::Export { input, output, format, tables } => {
            run_export(&input, output.as_deref(), format, tables.as_deref())
        }
        Commands::Duplicates { input, tables } => run_duplicates(&input, tables.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_config(tables: Option<&Path>) -> placeways::Result<AnalysisConfig> {
    match tables {
        Some(path) => {
            tracing::info!("Loading category tables from {}", path.display());
            AnalysisConfig::load_from_file(path)
        }
        None => Ok(AnalysisConfig::default()),
    }
}

/// Compose the report and write it to `output` or stdout
fn run_report(input: &Path, output: Option<&Path>, tables: Option<&Path>) -> placeways::Result<()> {
    let config = load_config(tables)?;
    let text = read_source(input)?;
    let analysis = analyze(&text, &config)?;

    let report = ReportComposer::new(config.display.title.as_str()).compose(&analysis);

    match output {
        Some(path) => {
            write_file(path, &report)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Write the display-ordered export to `output` or stdout
fn run_export(
    input: &Path,
    output: Option<&Path>,
    format: ExportFormat,
    tables: Option<&Path>,
) -> placeways::Result<()> {
    let config = load_config(tables)?;
    let text = read_source(input)?;
    let analysis = analyze(&text, &config)?;

    let entries = ordered_export(analysis.store(), &config.display.district_order);
    let omitted = analysis.total_roads().saturating_sub(entries.len());
    if omitted > 0 {
        tracing::info!("{} roads outside the district order were left out", omitted);
    }

    match output {
        Some(path) => {
            write_export(&entries, format, create_file(path)?)?;
            tracing::info!("Exported {} roads to {}", entries.len(), path.display());
        }
        None => write_export(&entries, format, std::io::stdout().lock())?,
    }

    Ok(())
}

/// Print duplicate-road diagnostics
fn run_duplicates(input: &Path, tables: Option<&Path>) -> placeways::Result<()> {
    let config = load_config(tables)?;
    let text = read_source(input)?;
    let analysis = analyze(&text, &config)?;

    println!("原始数据行数: {}", analysis.candidate_rows);
    println!("有效数据条数: {}", analysis.store().len());
    println!();
    print!(
        "{}",
        ReportComposer::new(config.display.title.as_str()).compose_duplicates(analysis.store())
    );

    Ok(())
}
