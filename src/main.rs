use clap::Parser;
use miette::Result;
use pxshape::cli::{Cli, Commands};
use pxshape::output::Printer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let printer = Printer::new();
    match cli.command {
        Commands::Draw(args) => pxshape::cli::draw::run(args, &printer)?,
        Commands::Points(args) => pxshape::cli::points::run(args, &printer)?,
        Commands::Completions(args) => pxshape::cli::completions::run(args)?,
    }

    Ok(())
}
