/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Token providers
//!
//! The client never caches the bearer token: it asks its [`TokenProvider`] on every
//! request. Login and logout flows write through a [`TokenStore`].

use crate::constants::AUTH_TOKEN_KEY;
use crate::error::AppError;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Source of the bearer token attached to outgoing requests
pub trait TokenProvider: Send + Sync {
    /// Current token, or `None` when the user is not authenticated
    fn token(&self) -> Option<String>;
}

/// Token provider that can also be written by login / logout flows
pub trait TokenStore: TokenProvider {
    /// Persists a new token, replacing any previous one
    fn set_token(&self, token: &str) -> Result<(), AppError>;

    /// Removes the stored token
    fn clear_token(&self) -> Result<(), AppError>;
}

impl<F> TokenProvider for F
where
    F: Fn() -> Option<String> + Send + Sync,
{
    fn token(&self) -> Option<String> {
        self()
    }
}

/// Provider that never yields a token
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Provider returning a fixed token
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    /// Creates a provider always returning `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenProvider for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// In-memory token store
///
/// Clones share the same slot, so a clone handed to the client observes
/// `set_token` / `clear_token` calls made through any other clone.
#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    slot: Arc<RwLock<Option<String>>>,
}

impl MemoryTokenStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(token.into()))),
        }
    }
}

impl TokenProvider for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        match self.slot.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn set_token(&self, token: &str) -> Result<(), AppError> {
        let mut guard = self.slot.write().unwrap_or_else(|p| p.into_inner());
        *guard = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), AppError> {
        let mut guard = self.slot.write().unwrap_or_else(|p| p.into_inner());
        *guard = None;
        Ok(())
    }
}

/// Token store persisted as a JSON key/value file
///
/// The file holds a flat object of string values, like browser local storage; the token
/// lives under the `authToken` key and other keys are left untouched on writes.
/// The file is re-read on every [`TokenProvider::token`] call.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    key: String,
}

impl FileTokenStore {
    /// Creates a store backed by `path`, using the `authToken` key
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: AUTH_TOKEN_KEY.to_string(),
        }
    }

    /// Uses a different key inside the file
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&raw)? {
            Value::Object(entries) => Ok(entries),
            other => Err(AppError::Deserialization(format!(
                "token store {} is not a JSON object: {other}",
                self.path.display()
            ))),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl TokenProvider for FileTokenStore {
    fn token(&self) -> Option<String> {
        match self.read_entries() {
            Ok(entries) => match entries.get(&self.key) {
                Some(Value::String(token)) if !token.is_empty() => Some(token.clone()),
                _ => None,
            },
            Err(e) => {
                warn!("Could not read token store {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

impl TokenStore for FileTokenStore {
    fn set_token(&self, token: &str) -> Result<(), AppError> {
        let mut entries = self.read_entries()?;
        entries.insert(self.key.clone(), Value::String(token.to_string()));
        self.write_entries(&entries)?;
        debug!("Stored auth token in {}", self.path.display());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), AppError> {
        let mut entries = self.read_entries()?;
        if entries.remove(&self.key).is_some() {
            self.write_entries(&entries)?;
            debug!("Removed auth token from {}", self.path.display());
        }
        Ok(())
    }
}
