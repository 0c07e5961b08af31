use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::columns::{get_column_index, standardize_column};
use crate::core::error::HeaderError;
use crate::core::types::ColumnSpec;
use crate::parsing::pairs::read_header_file;

#[derive(Args)]
pub struct ColumnsArgs {
    /// Input pairs file (plain or gzipped). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Column to resolve: a name, an alias, or a position (negative counts from the end)
    #[arg(short, long, value_parser = parse_column_spec, allow_negative_numbers = true)]
    pub column: Option<ColumnSpec>,

    /// Standardize column names (e.g. chr1 -> chrom1) before lookup
    #[arg(long)]
    pub standardize: bool,
}

/// Integers are positions; anything else is a name
fn parse_column_spec(s: &str) -> Result<ColumnSpec, HeaderError> {
    s.parse()
}

/// Execute columns subcommand
///
/// # Errors
///
/// Returns an error if the header cannot be read, has no `#columns:` line, or
/// the requested column cannot be resolved.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ColumnsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let header = read_header_file(&args.input)?;
    let columns: Vec<&str> = header
        .column_names()
        .ok_or_else(|| anyhow::anyhow!("No '#columns:' line in {}", args.input.display()))?
        .into_iter()
        .map(|c| if args.standardize { standardize_column(c) } else { c })
        .collect();

    match &args.column {
        Some(spec) => {
            let index = get_column_index(&columns, spec)?;
            match format {
                OutputFormat::Text => println!("{index}"),
                OutputFormat::Json => {
                    let output = serde_json::json!({
                        "column": spec,
                        "index": index,
                        "name": columns[index],
                    });
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
        }
        None => match format {
            OutputFormat::Text => {
                for (i, name) in columns.iter().enumerate() {
                    println!("{i}\t{name}");
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&columns)?);
            }
        },
    }

    Ok(())
}
