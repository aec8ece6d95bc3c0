//! Environment inheritance for Layered Settings
//!
//! This crate decides which configuration sources a service loads, and in
//! what order, for a given environment:
//!
//! - **Environments**: named deployment contexts, each optionally inheriting
//!   from a parent
//! - **Registry**: the validated set of declared environments (unique names,
//!   compared case-insensitively)
//! - **Resolver**: the root-to-leaf chain for the current environment and the
//!   JSON source plan derived from it
//!
//! Merging the sources is left to the configuration store.
//!
//! # Example
//!
//! ```
//! use settings_core::{Environment, EnvironmentRegistry};
//!
//! let ppe = Environment::new("PPE").unwrap();
//! let dev = Environment::with_parent("Development", &ppe).unwrap();
//! let registry = EnvironmentRegistry::new([ppe, dev]).unwrap();
//!
//! let layers = registry.resolve(Some("Development")).unwrap();
//! assert_eq!(
//!     layers.source_paths(),
//!     ["appsettings.json", "appsettings.PPE.json", "appsettings.Development.json"]
//! );
//! ```

pub mod declaration;
pub mod environment;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod source;

pub use declaration::{Declarations, EnvironmentDecl};
pub use environment::{DEFAULT_ENVIRONMENT, DEVELOPMENT, Environment, PRODUCTION};
pub use error::{Error, Result};
pub use registry::{EnvironmentRegistry, validate};
pub use resolver::{LayerResolver, ResolvedLayers, resolve_layers};
pub use source::{BASE_SOURCE, JsonSource, RELOAD_ON_CHANGE_KEY, layer_file_name};
