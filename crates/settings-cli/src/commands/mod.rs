//! Command implementations for settings-cli

pub mod environments;
pub mod get;
pub mod layers;
pub mod show;

pub use environments::run_environments;
pub use get::run_get;
pub use layers::run_layers;
pub use show::run_show;

use settings_core::EnvironmentRegistry;
use settings_host::{Host, HostBuilder};

use crate::cli::HostArgs;
use crate::error::Result;
use crate::sample::sample_environments;

/// Declared environments: the `--environments` file, or the sample set
pub fn load_registry(args: &HostArgs) -> Result<EnvironmentRegistry> {
    let registry = match &args.environments {
        Some(path) => EnvironmentRegistry::from_toml_file(path)?,
        None => EnvironmentRegistry::new(sample_environments()?)?,
    };
    Ok(registry)
}

/// Build the host described by the global options
pub fn build_host(args: &HostArgs) -> Result<Host> {
    let registry = load_registry(args)?;

    let mut builder = HostBuilder::with_registry(args.overrides.iter().cloned(), registry);
    if let Some(root) = &args.content_root {
        builder = builder.content_root(root);
    }
    if let Some(environment) = &args.environment {
        builder = builder.environment(environment);
    }

    Ok(builder.build()?)
}
