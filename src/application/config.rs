use crate::constants::{
    API_BASE_URL_ENV, DEFAULT_API_BASE_URL, DEFAULT_TOKEN_FILE, TOKEN_FILE_ENV,
};
use crate::utils::config::{get_env_non_empty, non_empty_or};
use dotenv::dotenv;
use once_cell::sync::Lazy;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};

/// API base URL, resolved once per process
///
/// Read from `BOOK_TRACKER_API_URL` (after loading `.env`), falling back to
/// `http://localhost:8083/api/v1` when the variable is missing or empty.
pub static API_BASE_URL: Lazy<String> = Lazy::new(|| {
    load_dotenv();
    let base_url = resolve_base_url(env::var(API_BASE_URL_ENV).ok());
    info!("API_BASE_URL: {}", base_url);
    base_url
});

/// Resolves a configured base URL
///
/// A missing or blank value yields `http://localhost:8083/api/v1`. A trailing `/` is
/// removed so that endpoints such as `/books` concatenate cleanly.
pub fn resolve_base_url(value: Option<String>) -> String {
    non_empty_or(value, DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

fn load_dotenv() {
    match dotenv() {
        Ok(_) => debug!("Successfully loaded .env file"),
        Err(e) => debug!("Failed to load .env file: {e}"),
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Book Tracker client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Persisted client state configuration
    pub storage: StorageConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint is appended to, e.g. `http://localhost:8083/api/v1`
    pub base_url: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the persisted key/value store holding the auth token
pub struct StorageConfig {
    /// Path of the JSON file backing the store
    pub token_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// The base URL comes from the process-wide [`API_BASE_URL`]; the token file from
    /// `BOOK_TRACKER_TOKEN_FILE` (default `.book-tracker/storage.json`).
    pub fn new() -> Self {
        let base_url = API_BASE_URL.clone();
        let token_file = get_env_non_empty(TOKEN_FILE_ENV, DEFAULT_TOKEN_FILE);

        Config {
            rest_api: RestApiConfig { base_url },
            storage: StorageConfig {
                token_file: PathBuf::from(token_file),
            },
        }
    }

    /// Creates a configuration pointing at an explicit base URL
    ///
    /// The value is resolved like `BOOK_TRACKER_API_URL`, see [`resolve_base_url`].
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: resolve_base_url(Some(base_url.into())),
            },
            storage: StorageConfig {
                token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            },
        }
    }

    /// Replaces the token file location
    #[must_use]
    pub fn with_token_file(mut self, token_file: impl Into<PathBuf>) -> Self {
        self.storage.token_file = token_file.into();
        self
    }

    /// Base URL of the API
    pub fn base_url(&self) -> &str {
        &self.rest_api.base_url
    }
}
