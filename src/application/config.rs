/******************************************************************************
   Author: River Monitoring Authority
   Date: 16/10/26
******************************************************************************/
use crate::constants::DEFAULT_BASE_URL;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, error};

const DEFAULT_USERNAME: &str = "default_username";
const DEFAULT_PASSWORD: &str = "default_password";

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Credentials used by [`Auth::login_with_config`](crate::application::auth::Auth::login_with_config)
pub struct Credentials {
    /// Dashboard user name
    pub username: String,
    /// Dashboard password
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the monitoring REST API, e.g. `http://localhost:8000/api`
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Default)]
/// Where session tokens are kept between runs
pub struct StorageConfig {
    /// JSON file holding the tokens. Tokens live in memory only when `None`
    pub token_file: Option<PathBuf>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the river monitor client
pub struct Config {
    /// Login credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Token storage configuration
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment and an optional `.env` file
    ///
    /// | Variable           | Default                      |
    /// |--------------------|------------------------------|
    /// | `RIVER_API_URL`    | `http://localhost:8000/api`  |
    /// | `RIVER_USERNAME`   | placeholder, logged as error |
    /// | `RIVER_PASSWORD`   | placeholder, logged as error |
    /// | `RIVER_TOKEN_FILE` | none (memory only)           |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("RIVER_USERNAME", String::from(DEFAULT_USERNAME));
        let password = get_env_or_default("RIVER_PASSWORD", String::from(DEFAULT_PASSWORD));

        if username == DEFAULT_USERNAME {
            error!("RIVER_USERNAME not found in environment variables or .env file");
        }
        if password == DEFAULT_PASSWORD {
            error!("RIVER_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("RIVER_API_URL", String::from(DEFAULT_BASE_URL)),
            },
            storage: StorageConfig {
                token_file: get_env_or_none("RIVER_TOKEN_FILE"),
            },
        }
    }

    /// Builds a configuration pointing at `base_url` without reading the environment
    ///
    /// Credentials are left empty and tokens are kept in memory.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                username: String::new(),
                password: String::new(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
            },
            storage: StorageConfig::default(),
        }
    }

    /// Returns a copy using the given credentials
    #[must_use]
    pub fn with_credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Credentials {
            username: username.into(),
            password: password.into(),
        };
        self
    }

    /// Returns a copy persisting tokens to `path`
    #[must_use]
    pub fn with_token_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage.token_file = Some(path.into());
        self
    }

    /// Joins `path` onto the configured base URL with exactly one `/`
    ///
    /// Absolute `http://` or `https://` paths are returned unchanged.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
