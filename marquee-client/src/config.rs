//! Client configuration.

use std::{path::Path, time::Duration};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
    value::Uncased,
};
use serde::{Deserialize, Serialize};

/// The default origin of the catalog server.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8000";
/// The default path the API is mounted under.
pub const DEFAULT_BASE_PATH: &str = "/api";
/// The default request timeout, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// The main configuration struct.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// API access configuration.
    pub api: ApiConfig,
}

impl Config {
    /// Loads a config from the environment and a given config path.
    ///
    /// A missing file is not an error; the defaults and environment are used
    /// instead.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Config, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("MARQUEE_").split("__"))
            .merge(
                Env::raw()
                    .only(&["API_URL"])
                    .map(|_| Uncased::from("api.origin")),
            )
            .extract()
    }
}

/// API connectivity config.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    /// The scheme, host and port of the catalog server.
    pub origin: String,
    /// The path the API is mounted under.
    pub base_path: String,
    /// How long a request may take before it is abandoned, in seconds.
    pub timeout_secs: u64,
}

impl ApiConfig {
    /// Creates a config for a server at `origin` with default settings.
    pub fn new(origin: impl Into<String>) -> ApiConfig {
        ApiConfig {
            origin: origin.into(),
            ..Default::default()
        }
    }

    /// The URL request paths are appended to.
    pub fn endpoint(&self) -> String {
        let origin = self.origin.trim_end_matches('/');
        let base_path = self.base_path.trim_end_matches('/');

        if base_path.is_empty() || base_path.starts_with('/') {
            format!("{}{}", origin, base_path)
        } else {
            format!("{}/{}", origin, base_path)
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            origin: DEFAULT_ORIGIN.to_owned(),
            base_path: DEFAULT_BASE_PATH.to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}
