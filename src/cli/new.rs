use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::cli::{write_header, OutputArgs, OutputFormat};
use crate::core::header::{HeaderBuilder, DEFAULT_SHAPE};
use crate::utils::validation::parse_chromsizes;

#[derive(Args)]
pub struct NewArgs {
    /// Chromosome sizes file (name<TAB>length per line), kept in file order
    #[arg(long)]
    pub chromsizes: Option<PathBuf>,

    /// Column names, comma-separated (default: the standard pairs columns)
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Genome assembly name, written as '#genome_assembly:'
    #[arg(long)]
    pub assembly: Option<String>,

    /// Value of the '#shape:' line
    #[arg(long, default_value = DEFAULT_SHAPE)]
    pub shape: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Execute new subcommand
///
/// # Errors
///
/// Returns an error if the chromsizes file cannot be read or parsed, or the
/// header cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: NewArgs, format: OutputFormat) -> anyhow::Result<()> {
    let mut builder = HeaderBuilder::new().shape(&args.shape);

    if let Some(path) = &args.chromsizes {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read chromsizes from {}", path.display()))?;
        let chromsizes = parse_chromsizes(&text)?;
        builder = builder.chromsizes(chromsizes);
    }
    if let Some(columns) = &args.columns {
        builder = builder.columns(columns.iter().map(String::as_str));
    }
    if let Some(assembly) = &args.assembly {
        builder = builder.assembly(assembly);
    }

    write_header(&builder.build(), args.output.output.as_deref(), format)
}
