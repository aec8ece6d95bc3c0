//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Inspect environment-layered configuration
#[derive(Parser, Debug)]
#[command(name = "layered-settings")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub host: HostArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options that shape the host
#[derive(Args, Debug, Clone, Default)]
pub struct HostArgs {
    /// Current environment (defaults to Production)
    #[arg(short, long, global = true, env = "APP_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Directory containing the appsettings files
    #[arg(long, global = true)]
    pub content_root: Option<PathBuf>,

    /// TOML file declaring environments; the sample set is used otherwise
    #[arg(long, global = true)]
    pub environments: Option<PathBuf>,

    /// Override a setting, e.g. `--set app:common_option=value`
    #[arg(long = "set", value_name = "KEY=VALUE", global = true)]
    pub overrides: Vec<String>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the settings files loaded for the environment, in load order
    Layers {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the merged configuration
    Show {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print a single merged value
    ///
    /// Examples:
    ///   layered-settings get app:common_option
    ///   layered-settings -e Development get app.dev_override_ppe_option
    Get {
        /// Setting key, sections separated by ':' or '.'
        key: String,
    },

    /// List declared environments and their parents
    Environments,
}
