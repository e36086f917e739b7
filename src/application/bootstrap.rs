/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Application bootstrap
//!
//! Wires logging, configuration, the persisted token store and the API client
//! together. The login / logout flows that write the token live here, outside the
//! client itself.

use crate::application::client::ApiClient;
use crate::application::config::Config;
use crate::application::interfaces::auth::AuthService;
use crate::application::token::{FileTokenStore, TokenStore};
use crate::error::AppError;
use crate::model::requests::{Credentials, RegisterRequest};
use crate::model::responses::{AuthSession, MessageResponse};
use crate::utils::logger::setup_logger;
use std::sync::Arc;
use tracing::{info, warn};

/// A bootstrapped application: configuration, token store and API client
pub struct App {
    config: Arc<Config>,
    token_store: Arc<dyn TokenStore>,
    client: ApiClient,
}

impl App {
    /// Bootstraps from the environment
    pub fn bootstrap() -> Self {
        Self::bootstrap_with(Config::new())
    }

    /// Bootstraps with an explicit configuration, storing the token in the configured file
    pub fn bootstrap_with(config: Config) -> Self {
        let store = Arc::new(FileTokenStore::new(config.storage.token_file.clone()));
        Self::with_token_store(config, store)
    }

    /// Bootstraps with an explicit configuration and token store
    pub fn with_token_store(config: Config, token_store: Arc<dyn TokenStore>) -> Self {
        setup_logger();
        info!("Bootstrapping book tracker client against {}", config.base_url());

        let store = token_store.clone();
        let provider = Arc::new(move || store.token());
        let client = ApiClient::with_token_provider(config.clone(), provider);

        Self {
            config: Arc::new(config),
            token_store,
            client,
        }
    }

    /// The API client
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// The token store used by the client
    pub fn token_store(&self) -> Arc<dyn TokenStore> {
        self.token_store.clone()
    }

    /// The active configuration
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Whether a token is currently stored
    pub fn is_signed_in(&self) -> bool {
        self.token_store.token().is_some()
    }

    /// Logs in and stores the returned token
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<AuthSession, AppError> {
        let session = self.client.login(credentials).await?;
        self.remember(&session)?;
        Ok(session)
    }

    /// Registers and stores the returned token, if any
    pub async fn sign_up(&self, user: &RegisterRequest) -> Result<AuthSession, AppError> {
        let session = self.client.register(user).await?;
        self.remember(&session)?;
        Ok(session)
    }

    /// Logs out and forgets the stored token
    ///
    /// The token is cleared even when the server call fails; the server error is still returned.
    pub async fn sign_out(&self) -> Result<MessageResponse, AppError> {
        let result = self.client.logout().await;
        self.token_store.clear_token()?;
        result
    }

    fn remember(&self, session: &AuthSession) -> Result<(), AppError> {
        match session.token.as_deref() {
            Some(token) if !token.is_empty() => self.token_store.set_token(token),
            _ => {
                warn!("Server did not return a token; nothing stored");
                Ok(())
            }
        }
    }
}
