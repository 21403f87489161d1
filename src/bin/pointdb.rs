//! PointDB command-line driver.
//!
//! # Examples
//!
//! ```bash
//! # Generate 5 records and save them to data.bin
//! pointdb generate --count 5
//!
//! # Read a window from the saved file
//! pointdb read --offset 1 --limit 2
//!
//! # Show the record count
//! pointdb count
//! ```

use clap::{Parser, Subcommand};
use pointdb::store::{
    PaginatedReader, PointReader, PointStore, DEFAULT_DATA_PATH, DEFAULT_POINT_COUNT,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// PointDB - paginated flat-file point record store
#[derive(Parser, Debug)]
#[command(name = "pointdb")]
#[command(version = pointdb::VERSION)]
#[command(about = "PointDB - paginated flat-file point record store", long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Record file path
    #[arg(long, global = true, default_value = DEFAULT_DATA_PATH, env = "POINTDB_DATA")]
    data_path: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate records and save them to the record file
    Generate {
        /// Number of records to generate
        #[arg(short, long, default_value_t = DEFAULT_POINT_COUNT)]
        count: usize,
    },

    /// Read a window of records from the record file
    Read {
        /// 0-based record ordinal to start at
        #[arg(short, long, default_value_t = 0)]
        offset: usize,

        /// Maximum records to return (0 = everything to the end)
        #[arg(short, long, default_value_t = 0)]
        limit: usize,
    },

    /// Show the record count of the record file
    Count,

    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(&cli)?;

    match cli.command {
        Commands::Generate { count } => generate_command(&cli.data_path, count),
        Commands::Read { offset, limit } => read_command(&cli.data_path, offset, limit),
        Commands::Count => count_command(&cli.data_path),
        Commands::Version => {
            println!("PointDB {}", pointdb::VERSION);
            Ok(())
        }
    }
}

/// Setup console logging
fn setup_logging(cli: &Cli) -> anyhow::Result<()> {
    let log_level = cli
        .log_level
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_ansi(!cli.no_color)
        .with_env_filter(EnvFilter::from_default_env().add_directive(log_level.into()))
        .init();

    Ok(())
}

/// Generate command - produce records and persist them
fn generate_command(data_path: &Path, count: usize) -> anyhow::Result<()> {
    info!(count, path = ?data_path, "Generating point records");

    let store = PointStore::new();
    store.generate(count);
    store.save(data_path)?;

    println!("Saved {} records to {}", count, data_path.display());
    Ok(())
}

/// Read command - load the record file and print one page
fn read_command(data_path: &Path, offset: usize, limit: usize) -> anyhow::Result<()> {
    let store = Arc::new(PointStore::new());
    store.load(data_path)?;

    let reader = PaginatedReader::new(store);
    print_page(&reader, offset, limit)
}

/// Prints one page through the transport-facing read seam.
fn print_page(reader: &dyn PointReader, offset: usize, limit: usize) -> anyhow::Result<()> {
    let page = reader.read(offset, limit)?;
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}

/// Count command - show how many records the file holds
fn count_command(data_path: &Path) -> anyhow::Result<()> {
    let store = PointStore::new();
    store.load(data_path)?;

    println!("{}", store.len());
    Ok(())
}
