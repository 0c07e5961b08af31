use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{write_header, OutputArgs, OutputFormat};
use crate::merging::merge_headers;
use crate::parsing::pairs::read_header_file;

#[derive(Args)]
pub struct MergeArgs {
    /// Input pairs files (plain or gzipped)
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Union conflicting '#chromsize:'/'#columns:'/... lines instead of failing.
    /// Version and @HD mismatches are always fatal.
    #[arg(long)]
    pub force: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Execute merge subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be read, the headers are incompatible,
/// or the merged header cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MergeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let headers = args
        .inputs
        .iter()
        .map(|path| {
            read_header_file(path)
                .with_context(|| format!("Failed to read header from {}", path.display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    tracing::info!(inputs = headers.len(), force = args.force, "Merging headers");
    let merged = merge_headers(&headers, args.force)?;
    write_header(&merged, args.output.output.as_deref(), format)
}
