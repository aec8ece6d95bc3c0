//! Shared test utilities for the layered-settings workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`content_root`]: [`TestContentRoot`] for writing settings files into a
//!   temporary directory

pub mod content_root;

pub use content_root::TestContentRoot;
