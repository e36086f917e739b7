/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Book Tracker Client Prelude
//!
//! Commonly used types and traits in one import.
//!
//! ## Usage
//!
//! ```rust
//! use book_tracker_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8083/api/v1");
//! let client = ApiClient::new(config);
//! assert_eq!(client.base_url(), "http://localhost:8083/api/v1");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the client
pub use crate::application::config::{API_BASE_URL, Config, RestApiConfig, StorageConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT, SERVICES AND BOOTSTRAP
// ============================================================================

/// API client
pub use crate::application::client::ApiClient;

/// Service traits
pub use crate::application::services::{AuthService, BookService};

/// Bootstrapped application
pub use crate::application::bootstrap::App;

/// Token providers and stores
pub use crate::application::token::{
    FileTokenStore, MemoryTokenStore, NoToken, StaticToken, TokenProvider, TokenStore,
};

// ============================================================================
// MODELS
// ============================================================================

/// Request primitive options
pub use crate::model::http::RequestOptions;

/// Request bodies
pub use crate::model::requests::{CreateBookRequest, Credentials, RegisterRequest};

/// Response shapes
pub use crate::model::responses::{
    AuthSession, Book, BookStatus, BooksResponse, MessageResponse, User,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export reqwest for custom requests
pub use reqwest::{Method, StatusCode};
