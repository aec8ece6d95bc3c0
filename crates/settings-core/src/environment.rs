//! Named deployment environments
//!
//! An [`Environment`] is a name plus an optional parent name. Parents are
//! name links rather than owned nodes; they are resolved through an
//! [`EnvironmentRegistry`](crate::EnvironmentRegistry).

use crate::{Error, Result};

/// Conventional name of the production environment
pub const PRODUCTION: &str = "Production";

/// Conventional name of the development environment
pub const DEVELOPMENT: &str = "Development";

/// Environment assumed when the hosting context does not name one
pub const DEFAULT_ENVIRONMENT: &str = PRODUCTION;

/// A named deployment context that may inherit settings from a parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    name: String,
    parent: Option<String>,
}

impl Environment {
    /// Create a root environment (no parent).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyEnvironmentName`] if `name` is empty or only
    /// whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: non_empty(name.into())?,
            parent: None,
        })
    }

    /// Create an environment that inherits from `parent`.
    ///
    /// ```
    /// use settings_core::Environment;
    ///
    /// let ppe = Environment::new("PPE").unwrap();
    /// let dev = Environment::with_parent("Development", &ppe).unwrap();
    /// assert_eq!(dev.parent(), Some("PPE"));
    /// ```
    pub fn with_parent(name: impl Into<String>, parent: &Environment) -> Result<Self> {
        Self::inheriting(name, parent.name.clone())
    }

    /// Create an environment that inherits from the environment named
    /// `parent`. The parent must be declared in the same registry.
    pub fn inheriting(name: impl Into<String>, parent: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: non_empty(name.into())?,
            parent: Some(non_empty(parent.into())?),
        })
    }

    /// The environment name, as declared
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent environment name, if any
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Whether this environment has no parent
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Case-insensitive comparison against another environment name
    pub fn is_named(&self, name: &str) -> bool {
        name_key(&self.name) == name_key(name)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.parent {
            Some(parent) => write!(f, "{} (inherits {})", self.name, parent),
            None => f.write_str(&self.name),
        }
    }
}

/// Key used for case-insensitive name lookups.
pub(crate) fn name_key(name: &str) -> String {
    name.to_lowercase()
}

fn non_empty(name: String) -> Result<String> {
    if name.trim().is_empty() {
        return Err(Error::EmptyEnvironmentName);
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_root_environment() {
        let env = Environment::new("PPE").unwrap();
        assert_eq!(env.name(), "PPE");
        assert!(env.is_root());
        assert_eq!(env.parent(), None);
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            Environment::new(""),
            Err(Error::EmptyEnvironmentName)
        ));
        assert!(matches!(
            Environment::new("   "),
            Err(Error::EmptyEnvironmentName)
        ));
    }

    #[test]
    fn empty_parent_name_is_rejected() {
        assert!(matches!(
            Environment::inheriting("Development", ""),
            Err(Error::EmptyEnvironmentName)
        ));
    }

    #[test]
    fn with_parent_links_by_name() {
        let ppe = Environment::new("PPE").unwrap();
        let dev = Environment::with_parent(DEVELOPMENT, &ppe).unwrap();
        assert_eq!(dev.parent(), Some("PPE"));
        assert!(!dev.is_root());
    }

    #[test]
    fn is_named_ignores_case() {
        let env = Environment::new("Development").unwrap();
        assert!(env.is_named("development"));
        assert!(env.is_named("DEVELOPMENT"));
        assert!(!env.is_named("Dev"));
    }

    #[test]
    fn display_shows_parent() {
        let env = Environment::inheriting("Development", "PPE").unwrap();
        assert_eq!(env.to_string(), "Development (inherits PPE)");
        assert_eq!(Environment::new("PPE").unwrap().to_string(), "PPE");
    }
}
