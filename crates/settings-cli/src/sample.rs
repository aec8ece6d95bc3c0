//! Sample environments and settings shape

use serde::{Deserialize, Serialize};
use settings_core::{DEVELOPMENT, Environment, PRODUCTION, Result};

/// Production and PPE are roots; Development inherits PPE.
pub fn sample_environments() -> Result<Vec<Environment>> {
    let production = Environment::new(PRODUCTION)?;
    let ppe = Environment::new("PPE")?;
    let development = Environment::with_parent(DEVELOPMENT, &ppe)?;
    Ok(vec![production, development, ppe])
}

/// The `app` section of the sample settings files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Set in appsettings.json
    pub common_option: Option<String>,

    /// Set only in appsettings.Production.json
    pub production_only_option: Option<String>,

    /// Set only in appsettings.PPE.json
    pub ppe_only_option: Option<String>,

    /// Set only in appsettings.Development.json
    pub development_only_option: Option<String>,

    /// Set in appsettings.PPE.json, overridden in appsettings.Development.json
    pub dev_override_ppe_option: Option<String>,
}
