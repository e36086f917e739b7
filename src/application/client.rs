/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the Book Tracker API
//!
//! The client is stateless apart from its token provider, which is asked for the
//! current token on every request.
//!
//! # Example
//! ```ignore
//! use book_tracker_client::prelude::*;
//!
//! let client = ApiClient::with_token_provider(Config::new(), Arc::new(MemoryTokenStore::new()));
//! let books: BooksResponse = client.get("/books").await?;
//! ```

use crate::application::config::Config;
use crate::application::token::{NoToken, TokenProvider};
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{RequestOptions, make_http_request, parse_response};
use reqwest::Client as HttpInternalClient;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{error, warn};

/// Client for the Book Tracker REST API
pub struct ApiClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
    token_provider: Arc<dyn TokenProvider>,
}

impl ApiClient {
    /// Creates a client that never sends an `Authorization` header
    ///
    /// # Arguments
    /// * `config` - Configuration containing the API base URL
    pub fn new(config: Config) -> Self {
        Self::with_token_provider(config, Arc::new(NoToken))
    }

    /// Creates a client reading its bearer token from `token_provider`
    ///
    /// # Arguments
    /// * `config` - Configuration containing the API base URL
    /// * `token_provider` - Queried before every request
    pub fn with_token_provider(config: Config, token_provider: Arc<dyn TokenProvider>) -> Self {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build configured HTTP client, using defaults: {}", e);
                HttpInternalClient::new()
            });

        Self {
            http_client,
            config: Arc::new(config),
            token_provider,
        }
    }

    /// Base URL every endpoint is appended to
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Gets the current configuration
    pub fn config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Sends a request and decodes the JSON response into `T`
    ///
    /// # Arguments
    /// * `endpoint` - Path appended to the base URL, e.g. `/books/42`
    /// * `options` - Method, headers, body and query
    ///
    /// # Returns
    /// * `Ok(T)` - Decoded response body; `serde_json::Value` returns it unchanged
    /// * `Err(AppError)` - HTTP, transport, parse or decode failure
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, AppError> {
        let token = self.token_provider.token();

        let result = match make_http_request(
            &self.http_client,
            self.base_url(),
            endpoint,
            options,
            token.as_deref(),
        )
        .await
        {
            Ok(response) => parse_response(response).await,
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            error!("API request failed: {} {}", endpoint, e);
        }
        result
    }

    /// Makes a GET request
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        self.request(endpoint, RequestOptions::get()).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(endpoint, RequestOptions::post().with_json(body)?)
            .await
    }

    /// Makes a POST request without a body
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        self.request(endpoint, RequestOptions::post()).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, AppError> {
        self.request(endpoint, RequestOptions::put().with_json(body)?)
            .await
    }

    /// Makes a DELETE request
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, AppError> {
        self.request(endpoint, RequestOptions::delete()).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
