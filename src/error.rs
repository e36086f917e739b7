/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use std::fmt;
use std::io;

/// Main error type for the library
///
/// Failures fall into two families:
/// - [`AppError::Http`]: the server answered with a status outside 2xx
/// - everything else: transport, parsing or local failures, which carry no status code
#[derive(Debug)]
pub enum AppError {
    /// Non-2xx response from the API
    Http {
        /// Message taken from the `error` field of the body, the status text, or a generic template
        message: String,
        /// Status code returned by the server
        status: StatusCode,
    },
    /// Transport-level failure (DNS, connection refused, broken connection)
    Network(reqwest::Error),
    /// Body is not valid JSON
    Json(serde_json::Error),
    /// Body is valid JSON but does not have the expected shape
    Deserialization(String),
    /// Local I/O failure, e.g. while accessing the token store
    Io(io::Error),
    /// Argument rejected before any request was sent
    InvalidInput(String),
}

impl AppError {
    /// Builds an HTTP error from a message and a status code
    pub fn http(message: impl Into<String>, status: StatusCode) -> Self {
        AppError::Http {
            message: message.into(),
            status,
        }
    }

    /// Numeric status code for HTTP errors, `None` for every other kind
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(status.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` for non-2xx responses
    #[must_use]
    pub fn is_http(&self) -> bool {
        matches!(self, AppError::Http { .. })
    }

    /// Human readable message without the kind prefix used by `Display`
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            AppError::Http { message, .. } => message.clone(),
            AppError::Network(e) => e.to_string(),
            AppError::Json(e) => e.to_string(),
            AppError::Deserialization(msg) | AppError::InvalidInput(msg) => msg.clone(),
            AppError::Io(e) => e.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http { message, .. } => write!(f, "{message}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::Io(e)
    }
}
