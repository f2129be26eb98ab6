//! Shared configuration library for cinescope.
//!
//! Centralizes where the metadata-service credentials and endpoint come
//! from (CLI flags, environment, `.env`, TOML/JSON file), the defaults that
//! apply when nothing is set, and the validation that runs before any
//! request is issued.

#![allow(missing_docs)]

pub mod constants;
pub mod loader;
pub mod models;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::{CliOverrides, EnvConfig, FileConfig};
pub use models::{ApiConfig, ApiKey, Config, ConfigSource, PresentationConfig};
