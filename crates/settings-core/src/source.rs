//! Configuration source identifiers handed to the configuration store

/// Base source, loaded before any environment layer
pub const BASE_SOURCE: &str = "appsettings.json";

/// Host configuration key controlling the reload flag
pub const RELOAD_ON_CHANGE_KEY: &str = "hostBuilder:reloadConfigOnChange";

/// File name of the source for one environment layer
pub fn layer_file_name(environment: &str) -> String {
    format!("appsettings.{environment}.json")
}

/// A request to load one JSON source
///
/// `path` is relative to the content root. `reload_on_change` is opaque
/// here; it is passed to the store unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonSource {
    pub path: String,
    pub optional: bool,
    pub reload_on_change: bool,
}

impl JsonSource {
    /// An optional source (missing files are skipped by the store)
    pub fn optional(path: impl Into<String>, reload_on_change: bool) -> Self {
        Self {
            path: path.into(),
            optional: true,
            reload_on_change,
        }
    }
}
