//! Environment declaration files
//!
//! Environments can be declared in TOML instead of code:
//!
//! ```toml
//! [[environment]]
//! name = "PPE"
//!
//! [[environment]]
//! name = "Development"
//! parent = "PPE"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::registry::EnvironmentRegistry;
use crate::{Error, Result};

/// One `[[environment]]` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Parsed contents of a declaration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Declarations {
    #[serde(default, rename = "environment")]
    pub environments: Vec<EnvironmentDecl>,
}

impl Declarations {
    /// Parse declarations from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let declarations: Declarations = toml::from_str(content)?;
        Ok(declarations)
    }

    /// Convert each declaration into an [`Environment`]
    pub fn into_environments(self) -> Result<Vec<Environment>> {
        self.environments
            .into_iter()
            .map(|decl| match decl.parent {
                Some(parent) => Environment::inheriting(decl.name, parent),
                None => Environment::new(decl.name),
            })
            .collect()
    }
}

impl EnvironmentRegistry {
    /// Build a registry from TOML declarations
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let environments = Declarations::parse(content)?.into_environments()?;
        Self::new(environments)
    }

    /// Read and validate a declaration file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        tracing::debug!(?path, "Loading environment declarations");
        let content = std::fs::read_to_string(path)?;
        let environments = Declarations::parse(&content)
            .map_err(|e| match e {
                Error::TomlDe(source) => Error::Declaration {
                    path: path.to_path_buf(),
                    message: source.to_string(),
                },
                other => other,
            })?
            .into_environments()?;
        Self::new(environments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_parents() {
        let declarations = Declarations::parse(
            r#"
[[environment]]
name = "PPE"

[[environment]]
name = "Development"
parent = "PPE"
"#,
        )
        .unwrap();

        assert_eq!(declarations.environments.len(), 2);
        assert_eq!(declarations.environments[0].parent, None);
        assert_eq!(
            declarations.environments[1].parent.as_deref(),
            Some("PPE")
        );
    }

    #[test]
    fn empty_content_declares_nothing() {
        let registry = EnvironmentRegistry::from_toml_str("").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn blank_name_in_declaration_is_rejected() {
        let result = EnvironmentRegistry::from_toml_str("[[environment]]\nname = \"\"\n");
        assert!(matches!(result, Err(Error::EmptyEnvironmentName)));
    }
}
