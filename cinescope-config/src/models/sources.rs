use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    ENV_API_KEY, ENV_BASE_URL, ENV_CONFIG_PATH, ENV_PLACEHOLDER_POSTER,
    ENV_TIMEOUT,
};
use crate::util::non_blank;

/// Raw configuration as defined in a TOML or JSON file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub presentation: FilePresentationConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Humantime duration such as `"15s"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FilePresentationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_poster: Option<String>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<String>,
    pub placeholder_poster: Option<String>,
    pub config_path: Option<PathBuf>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup, so callers (and tests) can
    /// avoid touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_key: non_blank(lookup(ENV_API_KEY)),
            base_url: non_blank(lookup(ENV_BASE_URL)),
            timeout: non_blank(lookup(ENV_TIMEOUT)),
            placeholder_poster: non_blank(lookup(ENV_PLACEHOLDER_POSTER)),
            config_path: non_blank(lookup(ENV_CONFIG_PATH)).map(PathBuf::from),
        }
    }
}

/// Values given on the command line; these win over everything else.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub config_path: Option<PathBuf>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}
