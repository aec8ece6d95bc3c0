//! Show command implementation

use colored::Colorize;
use serde_json::Value;

use crate::cli::HostArgs;
use crate::commands::build_host;
use crate::error::Result;
use crate::sample::AppConfig;

/// Section bound to [`AppConfig`]
const APP_SECTION: &str = "app";

/// Display the merged configuration
pub fn run_show(args: &HostArgs, json: bool) -> Result<()> {
    let host = build_host(args)?;
    let merged = host.to_json()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&merged)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Merged configuration for".bold(),
        host.environment_name().cyan()
    );
    println!();

    let entries = flatten(&merged);
    if entries.is_empty() {
        println!("  {}", "(empty)".dimmed());
    }
    for (key, value) in &entries {
        println!("  {} = {}", key, value);
    }

    if merged.get(APP_SECTION).is_some() {
        let app: AppConfig = host.get(APP_SECTION)?;
        println!();
        println!("{}:", "AppConfig".bold());
        println!("{:#?}", app);
    }

    Ok(())
}

/// Flatten nested objects into sorted `section:key` entries
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    flatten_into(value, String::new(), &mut entries);
    entries.sort();
    entries
}

fn flatten_into(value: &Value, prefix: String, entries: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}:{key}")
                };
                flatten_into(child, path, entries);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten_into(child, format!("{prefix}:{i}"), entries);
            }
        }
        Value::String(s) => entries.push((prefix, s.clone())),
        other => entries.push((prefix, other.to_string())),
    }
}
