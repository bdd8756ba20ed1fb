//! Command-line interface for mockgrid
//!
//! # Usage Examples
//!
//! ```bash
//! # 100 records with the default percentage hierarchy, to stdout
//! mockgrid records
//!
//! # Reproducible dataset, pretty-printed to a file
//! mockgrid records --count 500 --seed 42 --pretty --output data.json
//!
//! # Variable-depth tree outline instead of a flat forest
//! mockgrid records --strategy tree --max-level 3
//!
//! # Column schema for the grid consumer
//! mockgrid columns --pretty
//!
//! # Themed dataset from custom catalogs
//! mockgrid records --catalogs catalogs.yaml
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use mockgrid_core::{grid_columns, Catalogs};
use mockgrid_generator::{
    DatasetGenerator, HierarchyStrategy, DEFAULT_AVG_CHILDREN_PER_PARENT, DEFAULT_MAX_LEVEL,
    DEFAULT_PARENT_PERCENTAGE, DEFAULT_RECORD_COUNT,
};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "mockgrid", version, about = "Mock dataset generator for grid UIs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sample record dataset as JSON
    Records {
        /// Number of records to generate
        #[arg(long, default_value_t = DEFAULT_RECORD_COUNT)]
        count: usize,

        /// Random seed for deterministic generation (omit for fresh data per run)
        #[arg(long)]
        seed: Option<u64>,

        /// Hierarchy strategy: 'percentage' (depth-1 forest) or 'tree' (multi-level outline)
        #[arg(long, default_value = "percentage")]
        strategy: String,

        /// Percentage of records promoted to parents (percentage strategy)
        #[arg(long, default_value_t = DEFAULT_PARENT_PERCENTAGE)]
        parent_percentage: u8,

        /// Average children per parent (percentage strategy)
        #[arg(long, default_value_t = DEFAULT_AVG_CHILDREN_PER_PARENT)]
        avg_children: u32,

        /// Maximum tree depth (tree strategy)
        #[arg(long, default_value_t = DEFAULT_MAX_LEVEL)]
        max_level: u32,

        /// YAML file with custom value catalogs
        #[arg(long)]
        catalogs: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Emit the column schema as JSON
    Columns {
        /// YAML file with custom value catalogs (drives select-filter options)
        #[arg(long)]
        catalogs: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Records {
            count,
            seed,
            strategy,
            parent_percentage,
            avg_children,
            max_level,
            catalogs,
            output,
            pretty,
        } => {
            let catalogs = load_catalogs(catalogs)?;
            let strategy: HierarchyStrategy = strategy.parse()?;

            let mut generator = match seed {
                Some(seed) => DatasetGenerator::new(catalogs, seed),
                None => DatasetGenerator::from_entropy(catalogs),
            };

            let value = match strategy {
                HierarchyStrategy::Percentage { .. } => serde_json::to_value(
                    generator.generate_with(count, parent_percentage, avg_children),
                )?,
                HierarchyStrategy::RecursiveTree { .. } => {
                    serde_json::to_value(generator.generate_outline(max_level))?
                }
            };

            write_json(&value, output, pretty)
        }
        Commands::Columns {
            catalogs,
            output,
            pretty,
        } => {
            let catalogs = load_catalogs(catalogs)?;
            let value = serde_json::to_value(grid_columns(&catalogs))?;
            write_json(&value, output, pretty)
        }
    }
}

fn load_catalogs(path: Option<PathBuf>) -> anyhow::Result<Catalogs> {
    match path {
        Some(path) => Catalogs::from_file(&path)
            .with_context(|| format!("Failed to load catalogs from {path:?}")),
        None => Ok(Catalogs::default()),
    }
}

fn write_json(
    value: &serde_json::Value,
    output: Option<PathBuf>,
    pretty: bool,
) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file {path:?}"))?;
            let mut writer = BufWriter::new(file);
            write_value(&mut writer, value, pretty)?;
            writer.flush()?;
            info!("wrote JSON output to {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            write_value(&mut handle, value, pretty)?;
        }
    }
    Ok(())
}

fn write_value<W: Write>(
    writer: &mut W,
    value: &serde_json::Value,
    pretty: bool,
) -> anyhow::Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    } else {
        serde_json::to_writer(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}
