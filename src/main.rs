use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod merging;
mod parsing;
mod provenance;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("pairs_header=debug,info")
    } else {
        EnvFilter::new("pairs_header=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        cli::Commands::New(args) => cli::new::run(args, cli.format)?,
        cli::Commands::Columns(args) => cli::columns::run(args, cli.format)?,
        cli::Commands::Embed(args) => cli::embed::run(args, cli.format)?,
        cli::Commands::AddPg(args) => cli::add_pg::run(args, cli.format)?,
        cli::Commands::Merge(args) => cli::merge::run(args, cli.format)?,
    }

    Ok(())
}
