use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{write_header, OutputArgs, OutputFormat};
use crate::parsing::pairs::read_header_file;
use crate::provenance::insert_samheader;

#[derive(Args)]
pub struct EmbedArgs {
    /// Input pairs file (plain or gzipped). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// SAM header text file (e.g. from `samtools view -H`)
    #[arg(long, required = true)]
    pub sam: PathBuf,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Execute embed subcommand
///
/// # Errors
///
/// Returns an error if either input cannot be read or the header cannot be
/// written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: EmbedArgs, format: OutputFormat) -> anyhow::Result<()> {
    let header = read_header_file(&args.input)?;
    let sam_text = std::fs::read_to_string(&args.sam)
        .with_context(|| format!("Failed to read SAM header from {}", args.sam.display()))?;
    let sam_lines: Vec<&str> = sam_text
        .lines()
        .filter(|l| l.starts_with('@'))
        .collect();

    tracing::info!(lines = sam_lines.len(), "Embedding SAM header");
    let header = insert_samheader(&header, &sam_lines);
    write_header(&header, args.output.output.as_deref(), format)
}
