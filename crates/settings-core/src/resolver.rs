//! Layer resolution
//!
//! Given a registry and the current environment name, the resolver walks
//! parent links from the current environment up to its root and returns the
//! names root-first. Loading sources in that order makes the most specific
//! environment win when later sources override earlier ones.
//!
//! ```text
//! Development -> PPE            (walk, leaf to root)
//! [PPE, Development]            (reversed, root to leaf)
//! appsettings.json, appsettings.PPE.json, appsettings.Development.json
//! ```

use std::collections::HashSet;

use crate::environment::{DEFAULT_ENVIRONMENT, Environment, name_key};
use crate::registry::EnvironmentRegistry;
use crate::source::{self, JsonSource};
use crate::{Error, Result};

/// Resolves the ordered configuration layers for an environment
#[derive(Debug, Clone)]
pub struct LayerResolver {
    default_environment: String,
}

impl Default for LayerResolver {
    fn default() -> Self {
        Self {
            default_environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl LayerResolver {
    /// Resolver that falls back to [`DEFAULT_ENVIRONMENT`] when no current
    /// environment is given
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver with a custom fallback environment name
    pub fn with_default(default_environment: impl Into<String>) -> Self {
        Self {
            default_environment: default_environment.into(),
        }
    }

    /// The fallback environment name
    pub fn default_environment(&self) -> &str {
        &self.default_environment
    }

    /// The effective current environment name.
    ///
    /// Absent and blank names are replaced by the default.
    pub fn current_name<'a>(&'a self, current: Option<&'a str>) -> &'a str {
        match current {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.default_environment,
        }
    }

    /// Resolve the root-to-leaf layers for `current`.
    ///
    /// An environment that is not declared (including any name against an
    /// empty registry) resolves to itself alone. A parent that is not
    /// declared becomes the root layer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] if the parent walk revisits an
    /// environment.
    pub fn resolve(
        &self,
        registry: &EnvironmentRegistry,
        current: Option<&str>,
    ) -> Result<ResolvedLayers> {
        let current = self.current_name(current);

        let Some(mut environment) = registry.get(current) else {
            if !registry.is_empty() {
                tracing::warn!(
                    environment = current,
                    "Environment is not declared; loading it without inheritance"
                );
            }
            return Ok(ResolvedLayers::single(current));
        };

        let mut visited = HashSet::new();
        let mut names = Vec::new();
        loop {
            names.push(environment.name().to_string());
            if !visited.insert(name_key(environment.name())) {
                return Err(Error::CycleDetected { chain: names });
            }
            match (registry.parent_of(environment), environment.parent()) {
                (Some(parent), _) => environment = parent,
                (None, Some(parent)) => {
                    tracing::warn!(
                        environment = environment.name(),
                        parent,
                        "Parent is not declared; using it as the root layer"
                    );
                    names.push(parent.to_string());
                    break;
                }
                (None, None) => break,
            }
        }
        names.reverse();

        tracing::debug!(environment = current, layers = ?names, "Resolved environment layers");
        Ok(ResolvedLayers { names })
    }
}

/// Environment names ordered from root ancestor to the requested environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLayers {
    names: Vec<String>,
}

impl ResolvedLayers {
    fn single(name: &str) -> Self {
        Self {
            names: vec![name.to_string()],
        }
    }

    /// Layer names, root first
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The requested environment (the last layer)
    pub fn leaf(&self) -> &str {
        self.names.last().map(String::as_str).unwrap_or_default()
    }

    /// The root ancestor (the first layer)
    pub fn root(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The source load plan: the base source, then one source per layer.
    ///
    /// `reload_on_change` is copied unchanged onto every source.
    pub fn json_sources(&self, reload_on_change: bool) -> Vec<JsonSource> {
        std::iter::once(source::BASE_SOURCE.to_string())
            .chain(self.names.iter().map(|name| source::layer_file_name(name)))
            .map(|path| JsonSource::optional(path, reload_on_change))
            .collect()
    }

    /// Source file names in load order
    pub fn source_paths(&self) -> Vec<String> {
        self.json_sources(true)
            .into_iter()
            .map(|source| source.path)
            .collect()
    }
}

impl IntoIterator for ResolvedLayers {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

/// Validate `environments` and resolve the layers for `current`.
///
/// Equivalent to building an [`EnvironmentRegistry`] and calling
/// [`EnvironmentRegistry::resolve`]; `None` behaves like an empty set.
pub fn resolve_layers(
    environments: Option<&[Environment]>,
    current: Option<&str>,
) -> Result<ResolvedLayers> {
    let registry = EnvironmentRegistry::new(environments.unwrap_or_default().iter().cloned())?;
    registry.resolve(current)
}
