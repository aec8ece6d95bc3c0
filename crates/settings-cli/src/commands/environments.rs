//! Environments command implementation

use colored::Colorize;

use crate::cli::HostArgs;
use crate::commands::load_registry;
use crate::error::Result;

/// List declared environments with their inheritance chains
pub fn run_environments(args: &HostArgs) -> Result<()> {
    let registry = load_registry(args)?;

    println!("{}", "Declared Environments".bold());
    println!();

    if registry.is_empty() {
        println!("  {}", "(none)".dimmed());
        return Ok(());
    }

    for environment in registry.iter() {
        let layers = registry.resolve(Some(environment.name()))?;
        match environment.parent() {
            Some(parent) => println!(
                "  {} {} {} ({})",
                "+".green(),
                environment.name().cyan(),
                format!("inherits {parent}").dimmed(),
                layers.names().join(" -> ")
            ),
            None => println!("  {} {}", "+".green(), environment.name().cyan()),
        }
    }

    Ok(())
}
