//! Layers command implementation

use colored::Colorize;

use crate::cli::HostArgs;
use crate::commands::build_host;
use crate::error::Result;

/// Print the settings sources in load order
pub fn run_layers(args: &HostArgs, json: bool) -> Result<()> {
    let host = build_host(args)?;

    if json {
        let sources: Vec<_> = host
            .sources()
            .iter()
            .map(|source| {
                serde_json::json!({
                    "path": source.path,
                    "optional": source.optional,
                    "reload_on_change": source.reload_on_change,
                })
            })
            .collect();
        let output = serde_json::json!({
            "environment": host.environment_name(),
            "layers": host.layers().names(),
            "sources": sources,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}:  {}", "Environment".dimmed(), host.environment_name().cyan());
    println!("{}: {}", "Content root".dimmed(), host.content_root().display());
    println!();

    for (i, source) in host.sources().iter().enumerate() {
        let present = host.content_root().join(&source.path).is_file();
        let status = if present {
            "loaded".green()
        } else {
            "missing".dimmed()
        };
        println!("  {}. {} ({})", i + 1, source.path, status);
    }

    println!();
    println!(
        "{}: {}",
        "Reload on change".dimmed(),
        if host.reload_on_change() { "yes" } else { "no" }
    );
    Ok(())
}
