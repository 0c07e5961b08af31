//! Command-line interface for pairs-header.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **new**: Print a fresh default pairs header
//! - **columns**: List the columns of a pairs file or resolve one column spec
//! - **embed**: Embed a SAM header into a pairs header
//! - **add-pg**: Append a `@PG` record to the embedded SAM header
//! - **merge**: Merge the headers of several pairs files
//!
//! Commands that produce a header print its lines to stdout (or `--output`),
//! ready to be placed in front of the pairs records.
//!
//! ## Usage
//!
//! ```text
//! # New header with chromosome sizes
//! pairs-header new --chromsizes hg38.chrom.sizes --assembly hg38
//!
//! # Which position holds the pair type?
//! pairs-header columns sample.pairs.gz --column pt
//!
//! # Record a processing step
//! pairs-header add-pg sample.pairs.gz --id dedup --name pairtools_dedup
//!
//! # Merge headers before concatenating files
//! pairs-header merge a.pairs.gz b.pairs.gz --force
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::core::header::PairsHeader;

pub mod add_pg;
pub mod columns;
pub mod embed;
pub mod merge;
pub mod new;

#[derive(Parser)]
#[command(name = "pairs-header")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Build, extend and merge headers of .pairs files")]
#[command(
    long_about = "pairs-header builds and edits the '#' header block of .pairs files.\n\nIt can:\n- Create a default header with chromosome sizes\n- Resolve column names and aliases to positions\n- Embed SAM headers and extend their @PG chain\n- Merge the headers of several files, checking they are compatible"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a new default pairs header
    New(new::NewArgs),

    /// List columns or resolve a column name/position
    Columns(columns::ColumnsArgs),

    /// Embed a SAM header into a pairs header
    Embed(embed::EmbedArgs),

    /// Append a @PG record to the embedded SAM header
    AddPg(add_pg::AddPgArgs),

    /// Merge the headers of several pairs files
    Merge(merge::MergeArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Write a header as text lines or as a JSON object with a `lines` array
///
/// # Errors
///
/// Returns an error if the output cannot be created or written.
pub fn write_header(
    header: &PairsHeader,
    output: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    match format {
        OutputFormat::Text => writer.write_all(header.to_text().as_bytes())?,
        OutputFormat::Json => {
            let output = serde_json::json!({
                "version": header.version().map(|v| v.to_string()),
                "columns": header.column_names(),
                "lines": header.lines(),
            });
            writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Arguments shared by commands that write a header
#[derive(clap::Args)]
pub struct OutputArgs {
    /// Write the header here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
