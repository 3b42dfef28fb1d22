//! Configuration models for the WissKI bootstrap toolkit.
//!
//! Load order follows the usual deployment convention: built-in defaults,
//! then an optional TOML file, then environment variable overrides.

pub mod models;

pub use models::*;
