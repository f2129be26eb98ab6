use std::time::Duration;

/// Public endpoint of the OMDb metadata service.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Files probed, in order, when no explicit config path is given.
pub const CONFIG_FILE_CANDIDATES: &[&str] = &[
    "cinescope.toml",
    "cinescope.json",
    "config/cinescope.toml",
    "config/cinescope.json",
];

pub const ENV_API_KEY: &str = "OMDB_API_KEY";
pub const ENV_BASE_URL: &str = "OMDB_BASE_URL";
pub const ENV_TIMEOUT: &str = "OMDB_TIMEOUT";
pub const ENV_PLACEHOLDER_POSTER: &str = "CINESCOPE_PLACEHOLDER_POSTER";
pub const ENV_CONFIG_PATH: &str = "CINESCOPE_CONFIG_PATH";
