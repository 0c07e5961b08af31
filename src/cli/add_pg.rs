use std::path::PathBuf;

use clap::Args;

use crate::cli::{write_header, OutputArgs, OutputFormat};
use crate::core::samheader::ProgramRecord;
use crate::parsing::pairs::read_header_file;
use crate::provenance::append_program_record;

#[derive(Args)]
pub struct AddPgArgs {
    /// Input pairs file (plain or gzipped). Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Program ID (made unique if already present)
    #[arg(long, required = true)]
    pub id: String,

    /// Program name (PN tag)
    #[arg(long, required = true)]
    pub name: String,

    /// Program version (VN tag)
    #[arg(long)]
    pub program_version: Option<String>,

    /// Command line (CL tag)
    #[arg(long)]
    pub command_line: Option<String>,

    /// Extra TAG:value fields, may be repeated
    #[arg(long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, String)>,

    #[command(flatten)]
    pub output: OutputArgs,
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    s.split_once(':')
        .filter(|(tag, _)| !tag.is_empty())
        .map(|(tag, value)| (tag.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected TAG:value, got '{s}'"))
}

/// Execute add-pg subcommand
///
/// # Errors
///
/// Returns an error if the input cannot be read or the header cannot be
/// written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: AddPgArgs, format: OutputFormat) -> anyhow::Result<()> {
    let header = read_header_file(&args.input)?;

    let mut record = ProgramRecord::new(&args.id, &args.name);
    if let Some(version) = &args.program_version {
        record = record.with_version(version);
    }
    if let Some(command_line) = &args.command_line {
        record = record.with_command_line(command_line);
    }
    for (tag, value) in &args.fields {
        record = record.with_field(tag, value);
    }

    let header = append_program_record(&header, record);
    write_header(&header, args.output.output.as_deref(), format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("DS:deduplicated").unwrap(),
            ("DS".to_string(), "deduplicated".to_string())
        );
        assert_eq!(
            parse_field("CL:a:b").unwrap(),
            ("CL".to_string(), "a:b".to_string())
        );
        assert!(parse_field("novalue").is_err());
        assert!(parse_field(":x").is_err());
    }
}
