/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::model::responses::BookStatus;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /books`
///
/// Only the fields that were set are sent; extra fields are forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateBookRequest {
    /// Title of the book
    pub title: String,
    /// Optional author
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Optional initial status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<BookStatus>,
    /// Additional caller-supplied fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CreateBookRequest {
    /// Create a request with just the title (required field)
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the initial status
    pub fn with_status(mut self, status: impl Into<BookStatus>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Add an arbitrary field to the body
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Body of `PUT /books/{id}/status`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpdateStatusRequest<'a> {
    /// New status
    pub status: &'a str,
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Credentials {
    /// Login name
    pub username: String,
    /// Password
    pub password: String,
    /// Additional caller-supplied fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Credentials {
    /// Creates credentials from a username and a password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            extra: Map::new(),
        }
    }
}

/// Body of `POST /auth/register`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Login name
    pub username: String,
    /// Password
    pub password: String,
    /// Optional e-mail address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Additional caller-supplied fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegisterRequest {
    /// Creates a registration request from a username and a password
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Set the e-mail address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Add an arbitrary field to the body
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
