//! Host bootstrap for Layered Settings
//!
//! Turns a validated environment set into a loaded configuration: resolves
//! the layers for the current environment, loads the JSON sources under a
//! content root through the `config` crate, then applies environment
//! variables and command-line overrides.
//!
//! # Example
//!
//! ```no_run
//! use settings_core::Environment;
//! use settings_host::HostBuilder;
//!
//! # fn main() -> settings_host::Result<()> {
//! let ppe = Environment::new("PPE")?;
//! let dev = Environment::with_parent("Development", &ppe)?;
//!
//! let host = HostBuilder::new(std::env::args().skip(1), Some(vec![ppe, dev]))?
//!     .environment("Development")
//!     .build()?;
//! println!("{:?}", host.get_string("app:common_option")?);
//! # Ok(())
//! # }
//! ```

pub mod command_line;
pub mod error;
pub mod host;
pub mod sink;

pub use error::{Error, Result};
pub use host::{DEFAULT_ENV_PREFIX, ENVIRONMENT_KEY, Host, HostBuilder};
pub use sink::{ConfigSink, SourceSink};
