pub mod error;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::anyhow;
use url::Url;

use crate::constants::{
    CONFIG_FILE_CANDIDATES, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT,
};
use crate::models::sources::{CliOverrides, EnvConfig, FileConfig};
use crate::models::{
    ApiConfig, ApiKey, Config, ConfigSource, PresentationConfig,
};
use crate::util::{non_blank, parse_duration};

use self::error::ConfigLoadError;

/// Result of a successful load.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: Config,
    /// `.env` file that contributed variables, if one was found.
    pub dotenv_path: Option<PathBuf>,
}

/// Composes the effective configuration from flags, environment, and file.
///
/// Precedence, highest first: CLI overrides, environment, config file,
/// built-in defaults.
#[derive(Debug, Default, Clone)]
pub struct ConfigLoader {
    overrides: CliOverrides,
    skip_dotenv: bool,
}

impl ConfigLoader {
    pub fn new(overrides: CliOverrides) -> Self {
        Self {
            overrides,
            skip_dotenv: false,
        }
    }

    /// Do not read `.env` before gathering the environment.
    pub fn without_dotenv(mut self) -> Self {
        self.skip_dotenv = true;
        self
    }

    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let dotenv_path = if self.skip_dotenv {
            None
        } else {
            match dotenvy::dotenv() {
                Ok(path) => Some(path),
                Err(err) if err.not_found() => None,
                Err(err) => return Err(err.into()),
            }
        };

        let env = EnvConfig::gather();
        let config = self.load_with_env(env)?;
        Ok(ConfigLoad {
            config,
            dotenv_path,
        })
    }

    /// Same as [`ConfigLoader::load`] with an explicit environment snapshot.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<Config, ConfigLoadError> {
        let (file, source) = self.read_file_layer(&env)?;
        compose(file, env, &self.overrides, source)
    }

    fn read_file_layer(
        &self,
        env: &EnvConfig,
    ) -> Result<(FileConfig, ConfigSource), ConfigLoadError> {
        let explicit = self
            .overrides
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        if let Some(path) = explicit {
            let file = read_config_file(&path)?;
            return Ok((file, ConfigSource::Explicit(path)));
        }

        if let Some(path) = find_default_file() {
            let file = read_config_file(&path)?;
            return Ok((file, ConfigSource::Discovered(path)));
        }

        Ok((FileConfig::default(), ConfigSource::Default))
    }
}

/// Merge the three layers and validate the result.
pub fn compose(
    file: FileConfig,
    env: EnvConfig,
    overrides: &CliOverrides,
    source: ConfigSource,
) -> Result<Config, ConfigLoadError> {
    let api_key = non_blank(overrides.api_key.clone())
        .or(env.api_key)
        .or(non_blank(file.api.api_key))
        .ok_or(ConfigLoadError::MissingApiKey)?;

    let base_url_raw = non_blank(overrides.base_url.clone())
        .or(env.base_url)
        .or(non_blank(file.api.base_url))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let base_url = Url::parse(&base_url_raw).map_err(|source| {
        ConfigLoadError::InvalidBaseUrl {
            value: base_url_raw.clone(),
            source,
        }
    })?;

    let request_timeout =
        match env.timeout.or(non_blank(file.api.timeout)) {
            Some(raw) => parse_timeout(&raw)?,
            None => DEFAULT_REQUEST_TIMEOUT,
        };

    let presentation = PresentationConfig {
        placeholder_poster: env
            .placeholder_poster
            .or(non_blank(file.presentation.placeholder_poster))
            .unwrap_or_else(|| PresentationConfig::default().placeholder_poster),
    };

    tracing::debug!(
        base_url = %base_url,
        timeout_ms = request_timeout.as_millis() as u64,
        ?source,
        "resolved client configuration"
    );

    Ok(Config {
        api: ApiConfig {
            base_url,
            api_key: ApiKey::new(api_key),
            request_timeout,
        },
        presentation,
        source,
    })
}

fn parse_timeout(raw: &str) -> Result<Duration, ConfigLoadError> {
    let timeout = parse_duration(raw).map_err(|source| {
        ConfigLoadError::InvalidTimeout {
            value: raw.to_string(),
            source,
        }
    })?;
    if timeout.is_zero() {
        return Err(ConfigLoadError::ZeroTimeout);
    }
    Ok(timeout)
}

pub fn read_config_file(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigLoadError::FileIo {
            path: path.to_path_buf(),
            source,
        })?;

    parse_config_str(&contents, path).map_err(|source| {
        ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn parse_config_str(contents: &str, path: &Path) -> anyhow::Result<FileConfig> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(contents)
            .map_err(|err| anyhow!("invalid json: {err}")),
        Some("toml") => {
            toml::from_str(contents).map_err(|err| anyhow!("invalid toml: {err}"))
        }
        // Try TOML first, then JSON for convenience.
        _ => toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!("toml error: {toml_err}; json error: {json_err}")
            })
        }),
    }
}

fn find_default_file() -> Option<PathBuf> {
    CONFIG_FILE_CANDIDATES
        .iter()
        .map(Path::new)
        .find(|path| path.exists())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with_key(key: &str) -> EnvConfig {
        EnvConfig {
            api_key: Some(key.to_string()),
            ..EnvConfig::default()
        }
    }

    #[test]
    fn defaults_apply_when_only_key_is_set() {
        let config = compose(
            FileConfig::default(),
            env_with_key("abc123"),
            &CliOverrides::default(),
            ConfigSource::Default,
        )
        .unwrap();

        assert_eq!(config.api.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.api.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(config.api.api_key.expose(), "abc123");
        assert_eq!(
            config.presentation.placeholder_poster,
            cinescope_model::DEFAULT_POSTER_PLACEHOLDER
        );
    }

    #[test]
    fn missing_key_is_rejected() {
        let err = compose(
            FileConfig::default(),
            EnvConfig::default(),
            &CliOverrides::default(),
            ConfigSource::Default,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigLoadError::MissingApiKey));
    }

    #[test]
    fn cli_overrides_beat_environment_and_file() {
        let mut file = FileConfig::default();
        file.api.api_key = Some("from-file".into());
        file.api.base_url = Some("http://file.example/".into());
        let env = EnvConfig {
            api_key: Some("from-env".into()),
            base_url: Some("http://env.example/".into()),
            ..EnvConfig::default()
        };
        let overrides = CliOverrides {
            api_key: Some("from-flag".into()),
            ..CliOverrides::default()
        };

        let config =
            compose(file, env, &overrides, ConfigSource::Default).unwrap();
        assert_eq!(config.api.api_key.expose(), "from-flag");
        assert_eq!(config.api.base_url.as_str(), "http://env.example/");
    }

    #[test]
    fn zero_and_garbage_timeouts_are_rejected() {
        let env = EnvConfig {
            timeout: Some("0s".into()),
            ..env_with_key("k")
        };
        let err = compose(
            FileConfig::default(),
            env,
            &CliOverrides::default(),
            ConfigSource::Default,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigLoadError::ZeroTimeout));

        let env = EnvConfig {
            timeout: Some("whenever".into()),
            ..env_with_key("k")
        };
        let err = compose(
            FileConfig::default(),
            env,
            &CliOverrides::default(),
            ConfigSource::Default,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigLoadError::InvalidTimeout { .. }));
    }

    #[test]
    fn bad_base_url_is_reported_with_value() {
        let env = EnvConfig {
            base_url: Some("not a url".into()),
            ..env_with_key("k")
        };
        let err = compose(
            FileConfig::default(),
            env,
            &CliOverrides::default(),
            ConfigSource::Default,
        )
        .unwrap_err();
        match err {
            ConfigLoadError::InvalidBaseUrl { value, .. } => {
                assert_eq!(value, "not a url")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
