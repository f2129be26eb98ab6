pub mod sources;

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Fully resolved client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub presentation: PresentationConfig,
    pub source: ConfigSource,
}

/// Where the metadata service lives and how to talk to it.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: Url,
    pub api_key: ApiKey,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct PresentationConfig {
    /// Artwork used when the service reports no poster.
    pub placeholder_poster: String,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            placeholder_poster: cinescope_model::DEFAULT_POSTER_PLACEHOLDER
                .to_string(),
        }
    }
}

/// Source that supplied the file layer of the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// No file was found; only defaults, environment, and flags apply.
    #[default]
    Default,
    /// Path named explicitly (flag or `CINESCOPE_CONFIG_PATH`).
    Explicit(PathBuf),
    /// First existing default candidate.
    Discovered(PathBuf),
}

/// API credential for the metadata service. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        ApiKey(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(****)")
    }
}
