//! Environment registry
//!
//! The registry is the validated set of declared environments. It is built
//! once, checked for case-insensitive name uniqueness, and never mutated
//! afterwards. Parents outside the registry are allowed; resolution ends the
//! chain at them.

use std::collections::HashMap;

use crate::environment::{Environment, name_key};
use crate::resolver::{LayerResolver, ResolvedLayers};
use crate::{Error, Result};

/// Validated collection of declared environments
///
/// Environments live in an arena; the name index maps the lowercased name
/// to the arena slot, so lookups ignore case.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentRegistry {
    environments: Vec<Environment>,
    index: HashMap<String, usize>,
}

impl EnvironmentRegistry {
    /// Build a registry from the declared environments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateEnvironmentName`] on the first pair of names
    /// that compare equal ignoring case.
    pub fn new(environments: impl IntoIterator<Item = Environment>) -> Result<Self> {
        let mut registry = Self::default();

        for environment in environments {
            let key = name_key(environment.name());
            if registry.index.contains_key(&key) {
                return Err(Error::DuplicateEnvironmentName {
                    name: environment.name().to_string(),
                });
            }
            registry.index.insert(key, registry.environments.len());
            registry.environments.push(environment);
        }

        tracing::debug!(
            count = registry.environments.len(),
            "Validated environment registry"
        );
        Ok(registry)
    }

    /// A registry with no declared environments.
    ///
    /// Resolving against it always yields the single requested layer.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up an environment by name, ignoring case
    pub fn get(&self, name: &str) -> Option<&Environment> {
        self.index
            .get(&name_key(name))
            .map(|&slot| &self.environments[slot])
    }

    /// Whether an environment with this name is declared
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name_key(name))
    }

    /// The declared parent of `environment`, if it has one
    pub fn parent_of(&self, environment: &Environment) -> Option<&Environment> {
        environment.parent().and_then(|parent| self.get(parent))
    }

    /// Declared environments in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Environment> {
        self.environments.iter()
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    /// Resolve the root-to-leaf layers for `current`, defaulting to
    /// [`DEFAULT_ENVIRONMENT`](crate::DEFAULT_ENVIRONMENT) when absent.
    pub fn resolve(&self, current: Option<&str>) -> Result<ResolvedLayers> {
        LayerResolver::new().resolve(self, current)
    }
}

/// Validate a possibly-absent set of environments.
///
/// `None` and an empty slice both succeed: no layering is configured.
pub fn validate(environments: Option<&[Environment]>) -> Result<()> {
    EnvironmentRegistry::new(environments.unwrap_or_default().iter().cloned()).map(|_| ())
}
