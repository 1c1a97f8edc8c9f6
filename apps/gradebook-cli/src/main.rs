//! Gradebook CLI
//!
//! Runs roster and statistics commands against the built-in sample roster.

mod cli;
mod commands;
mod config;
mod error;
mod render;

use clap::Parser;
use gradebook_core::sample_roster;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use commands::Options;
use config::GradebookConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging; RUST_LOG takes precedence over -v
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    run(cli)?;
    Ok(())
}

fn run(cli: Cli) -> error::Result<()> {
    let config = GradebookConfig::load(cli.config.as_deref())?;
    let options = Options::from_config(&config, cli.json);
    let command = cli.command.unwrap_or(Command::Demo);

    let mut roster = sample_roster();
    tracing::debug!("Running {:?} on {} students", command, roster.len());

    let output = commands::execute(&command, &mut roster, &options)?;
    print!("{}", output);
    if options.json {
        println!();
    }

    Ok(())
}
