/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Book Tracker Client
//!
//! A client for the Book Tracker REST API (`/api/v1`).
//!
//! The crate wraps every endpoint of the remote service behind typed async methods:
//!
//! - books: list (optionally filtered by status), create, update status, delete
//! - auth: login, register, logout, current user
//!
//! All calls go through a single request primitive that attaches a bearer token when
//! one is available and normalizes failures into [`error::AppError`].
//!
//! ## Example
//!
//! ```ignore
//! use book_tracker_client::prelude::*;
//!
//! let config = Config::new();
//! let client = ApiClient::with_token_provider(config, Arc::new(StaticToken::new("secret")));
//!
//! let books = client.get_books(Some("reading")).await?;
//! for book in books.books {
//!     info!("{} ({})", book.title, book.status);
//! }
//! ```

/// Application layer: configuration, client, services and bootstrap
pub mod application;

/// Command line definitions of the `book-tracker` binary
pub mod cli;

/// Global constants
pub mod constants;

/// Error type shared by the whole crate
pub mod error;

/// Wire models and the HTTP request primitive
pub mod model;

/// Commonly used re-exports
pub mod prelude;

/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
