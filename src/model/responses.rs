/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{STATUS_READ, STATUS_READING, STATUS_TO_READ};
use chrono::{DateTime, Utc};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Reading status of a book
///
/// The server owns the set of valid values; anything it sends is kept verbatim and
/// serialised back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BookStatus {
    /// `to-read`
    ToRead,
    /// `reading`
    Reading,
    /// `read`
    Read,
    /// Any other value sent by the server
    Other(String),
}

impl BookStatus {
    /// Wire representation of the status
    pub fn as_str(&self) -> &str {
        match self {
            BookStatus::ToRead => STATUS_TO_READ,
            BookStatus::Reading => STATUS_READING,
            BookStatus::Read => STATUS_READ,
            BookStatus::Other(value) => value,
        }
    }
}

impl From<String> for BookStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            STATUS_TO_READ => BookStatus::ToRead,
            STATUS_READING => BookStatus::Reading,
            STATUS_READ => BookStatus::Read,
            _ => BookStatus::Other(value),
        }
    }
}

impl From<&str> for BookStatus {
    fn from(value: &str) -> Self {
        BookStatus::from(value.to_string())
    }
}

impl From<BookStatus> for String {
    fn from(status: BookStatus) -> Self {
        match status {
            BookStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A book as returned by the API
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned identifier
    pub id: u64,
    /// Title of the book
    #[serde(default)]
    pub title: String,
    /// Author, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Reading status
    pub status: BookStatus,
    /// Owner of the book
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    /// When the book was added to the shelf
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
    /// When reading started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_started: Option<DateTime<Utc>>,
    /// When reading finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_finished: Option<DateTime<Utc>>,
    /// Record creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Record update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Any other field sent by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /books`
#[derive(Debug, Clone, PartialEq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct BooksResponse {
    /// Books matching the request
    #[serde(default)]
    pub books: Vec<Book>,
    /// Number of books returned
    #[serde(default)]
    pub count: usize,
}

/// Plain acknowledgement such as `{"message": "Book deleted successfully"}`
#[derive(Debug, Clone, PartialEq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message sent by the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Any other field sent by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A registered user
#[derive(Debug, Clone, PartialEq, DisplaySimple, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier
    pub id: u64,
    /// Login name
    #[serde(default)]
    pub username: String,
    /// E-mail address, if the server exposes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Account creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    /// Any other field sent by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of the login and register endpoints
#[derive(Debug, Clone, PartialEq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct AuthSession {
    /// Bearer token to use for authenticated calls
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Authenticated user
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Optional message from the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Any other field sent by the server
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `GET /auth/me`
///
/// Accepts both `{"user": {...}}` and a bare user object.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum CurrentUser {
    /// User wrapped in a `user` field
    Wrapped {
        /// The user
        user: User,
    },
    /// Bare user object
    Bare(User),
}

impl CurrentUser {
    /// Unwraps the user regardless of the envelope
    pub fn into_user(self) -> User {
        match self {
            CurrentUser::Wrapped { user } | CurrentUser::Bare(user) => user,
        }
    }
}
