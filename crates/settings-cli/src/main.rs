//! Layered Settings CLI
//!
//! A sample host that resolves environment layers and prints the merged
//! configuration.

mod cli;
mod commands;
mod error;
mod sample;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Layers { json }) => commands::run_layers(&cli.host, json),
        Some(Commands::Show { json }) => commands::run_show(&cli.host, json),
        Some(Commands::Get { key }) => commands::run_get(&cli.host, &key),
        Some(Commands::Environments) => commands::run_environments(&cli.host),
        None => {
            println!("{} Layered Settings CLI", "layered-settings".green().bold());
            println!();
            println!(
                "Run {} for available commands.",
                "layered-settings --help".cyan()
            );
            Ok(())
        }
    }
}
