use clap::Parser;
use tracing_subscriber::EnvFilter;

mod catalog;
mod classifiers;
mod cli;
mod core;
mod matching;
mod rules;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("work_classifier=debug,info")
    } else {
        EnvFilter::new("work_classifier=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Classify(args) => {
            cli::classify::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Subject(args) => {
            cli::subject::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Taxonomy(args) => {
            cli::taxonomy::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
