//! Host bootstrap
//!
//! [`HostBuilder`] assembles the application configuration in this order
//! (later sources override earlier ones):
//!
//! 1. `appsettings.json`
//! 2. `appsettings.<Environment>.json` for each resolved layer, root first
//! 3. Prefixed environment variables (`APP_SECTION__KEY`)
//! 4. Command-line switches (`--section:key=value`)
//!
//! The environment set is validated when the builder is created, so a bad
//! declaration fails before any file is read.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError};
use serde::de::DeserializeOwned;
use settings_core::{
    Environment, EnvironmentRegistry, JsonSource, LayerResolver, RELOAD_ON_CHANGE_KEY,
    ResolvedLayers,
};

use crate::Result;
use crate::command_line::{self, store_key};
use crate::sink::{ConfigSink, SourceSink};

/// Default prefix for environment variables read by the host
pub const DEFAULT_ENV_PREFIX: &str = "APP";

/// Host configuration key naming the current environment (`APP_ENVIRONMENT`)
pub const ENVIRONMENT_KEY: &str = "environment";

/// Builds a [`Host`] with layered settings
#[derive(Debug, Clone)]
pub struct HostBuilder {
    args: Vec<String>,
    registry: EnvironmentRegistry,
    resolver: LayerResolver,
    content_root: Option<PathBuf>,
    environment: Option<String>,
    host_settings: Vec<(String, String)>,
    env_prefix: String,
    env_vars: Option<HashMap<String, String>>,
}

impl HostBuilder {
    /// Create a builder for `args` and the declared `environments`.
    ///
    /// `None` means no layering: only `appsettings.json` and the current
    /// environment's file are loaded.
    ///
    /// # Errors
    ///
    /// Fails immediately if two environments share a name, ignoring case.
    pub fn new<I, S>(args: I, environments: Option<Vec<Environment>>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let registry = EnvironmentRegistry::new(environments.unwrap_or_default())?;
        Ok(Self::with_registry(args, registry))
    }

    /// Create a builder from an already validated registry
    pub fn with_registry<I, S>(args: I, registry: EnvironmentRegistry) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            registry,
            resolver: LayerResolver::new(),
            content_root: None,
            environment: None,
            host_settings: Vec::new(),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            env_vars: None,
        }
    }

    /// Directory settings files are read from (defaults to the working directory)
    pub fn content_root(mut self, path: impl Into<PathBuf>) -> Self {
        self.content_root = Some(path.into());
        self
    }

    /// Use this environment instead of the one from host configuration
    pub fn environment(mut self, name: impl Into<String>) -> Self {
        self.environment = Some(name.into());
        self
    }

    /// Environment used when none is configured
    pub fn default_environment(mut self, name: impl Into<String>) -> Self {
        self.resolver = LayerResolver::with_default(name);
        self
    }

    /// Set a host configuration value, e.g. `hostBuilder:reloadConfigOnChange`
    pub fn host_setting(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.host_settings
            .push((host_key(key.as_ref()), value.into()));
        self
    }

    /// Prefix for environment variables (without the trailing `_`)
    pub fn env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Read environment variables from `vars` instead of the process
    pub fn env_vars(mut self, vars: HashMap<String, String>) -> Self {
        self.env_vars = Some(vars);
        self
    }

    pub fn registry(&self) -> &EnvironmentRegistry {
        &self.registry
    }

    /// Load all sources and build the host
    pub fn build(self) -> Result<Host> {
        let content_root = match &self.content_root {
            Some(root) => root.clone(),
            None => std::env::current_dir()?,
        };

        let host_configuration = self.host_configuration()?;
        let reload_on_change = reload_on_change(&host_configuration)?;

        let configured = match &self.environment {
            Some(name) => Some(name.clone()),
            None => optional_string(&host_configuration, ENVIRONMENT_KEY)?,
        };
        let layers = self.resolver.resolve(&self.registry, configured.as_deref())?;
        let sources = layers.json_sources(reload_on_change);

        let mut sink = ConfigSink::new(&content_root);
        for source in &sources {
            sink.add_json_source(source);
        }

        let mut builder = sink.into_builder().add_source(self.env_source());
        for (key, value) in command_line::parse(&self.args)? {
            tracing::debug!(%key, "Applying command-line override");
            builder = builder.set_override(key, value)?;
        }
        let configuration = builder.build()?;

        tracing::debug!(
            environment = layers.leaf(),
            sources = sources.len(),
            "Host configuration built"
        );
        Ok(Host {
            environment_name: layers.leaf().to_string(),
            content_root,
            layers,
            sources,
            reload_on_change,
            configuration,
        })
    }

    fn host_configuration(&self) -> Result<Config> {
        let mut builder = Config::builder().add_source(self.env_source());
        for (key, value) in &self.host_settings {
            builder = builder.set_override(key.as_str(), value.as_str())?;
        }
        Ok(builder.build()?)
    }

    fn env_source(&self) -> config::Environment {
        config::Environment::with_prefix(&self.env_prefix)
            .prefix_separator("_")
            .separator("__")
            .source(self.env_vars.clone())
    }
}

/// A built host: the resolved environment and its merged configuration
#[derive(Debug)]
pub struct Host {
    environment_name: String,
    content_root: PathBuf,
    layers: ResolvedLayers,
    sources: Vec<JsonSource>,
    reload_on_change: bool,
    configuration: Config,
}

impl Host {
    /// Effective environment name
    pub fn environment_name(&self) -> &str {
        &self.environment_name
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Resolved environment layers, root first
    pub fn layers(&self) -> &ResolvedLayers {
        &self.layers
    }

    /// JSON sources in the order they were loaded
    pub fn sources(&self) -> &[JsonSource] {
        &self.sources
    }

    /// The reload flag passed to every JSON source
    pub fn reload_on_change(&self) -> bool {
        self.reload_on_change
    }

    /// The merged configuration
    pub fn configuration(&self) -> &Config {
        &self.configuration
    }

    /// A string value, `None` if the key is not set.
    ///
    /// `key` may use `:` or `.` as the section separator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the key names a
    /// value that is not a string, such as a section.
    pub fn get_string(&self, key: &str) -> Result<Option<String>> {
        optional_string(&self.configuration, &store_key(key))
    }

    /// Deserialize the value at `key` (a section or a single value)
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        Ok(self.configuration.get(&store_key(key))?)
    }

    /// The whole configuration as JSON
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(self.configuration.clone().try_deserialize()?)
    }
}

/// Host keys are matched case-insensitively
fn host_key(key: &str) -> String {
    store_key(key).to_lowercase()
}

fn optional_string(configuration: &Config, key: &str) -> Result<Option<String>> {
    match configuration.get_string(key) {
        Ok(value) => Ok(Some(value)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn reload_on_change(host_configuration: &Config) -> Result<bool> {
    match host_configuration.get_bool(&host_key(RELOAD_ON_CHANGE_KEY)) {
        Ok(value) => Ok(value),
        Err(ConfigError::NotFound(_)) => Ok(true),
        Err(e) => Err(e.into()),
    }
}
