//! Get command implementation

use crate::cli::HostArgs;
use crate::commands::build_host;
use crate::error::{CliError, Result};

/// Print one merged value
pub fn run_get(args: &HostArgs, key: &str) -> Result<()> {
    let host = build_host(args)?;

    let value = host.get_string(key)?.ok_or_else(|| {
        CliError::user(format!(
            "Setting '{}' is not set for environment '{}'",
            key,
            host.environment_name()
        ))
    })?;

    println!("{}", value);
    Ok(())
}
