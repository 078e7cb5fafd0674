use clap::Parser;
use tracing_subscriber::EnvFilter;

mod analysis;
mod cli;
mod core;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("pansel=debug,info")
    } else {
        EnvFilter::new("pansel=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    cli::analyze::run(&cli, cli.verbose)?;

    Ok(())
}
