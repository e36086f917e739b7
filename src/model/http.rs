/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::DEFAULT_CONTENT_TYPE;
use crate::error::AppError;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";

/// Options for a single API request
///
/// Every field has a default: `GET`, no extra headers, no body, no query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// HTTP method
    pub method: Method,
    /// Headers merged over the default `Content-Type: application/json`
    pub headers: Vec<(String, String)>,
    /// JSON body
    pub body: Option<Value>,
    /// Query parameters appended to the URL
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    /// `GET` with no body
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `GET` with no body
    #[must_use]
    pub fn get() -> Self {
        Self::default()
    }

    /// `POST` with no body
    #[must_use]
    pub fn post() -> Self {
        Self::default().with_method(Method::POST)
    }

    /// `PUT` with no body
    #[must_use]
    pub fn put() -> Self {
        Self::default().with_method(Method::PUT)
    }

    /// `DELETE` with no body
    #[must_use]
    pub fn delete() -> Self {
        Self::default().with_method(Method::DELETE)
    }

    /// Set the method
    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add a header; a later header with the same name (case-insensitive) wins
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Set an already-encoded JSON body
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialise `body` to JSON and use it as the request body
    ///
    /// # Errors
    /// Returns [`AppError::Json`] if `body` cannot be represented as JSON.
    pub fn with_json<B: Serialize>(self, body: &B) -> Result<Self, AppError> {
        Ok(self.with_body(serde_json::to_value(body)?))
    }
}

/// Builds the final header list for a request
///
/// Starts from `Content-Type: application/json`, applies the caller headers
/// (case-insensitive replace), then sets `Authorization: Bearer <token>` when a token is
/// available. The token replaces any caller-supplied `Authorization` header.
pub fn build_headers(headers: &[(String, String)], token: Option<&str>) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> =
        vec![(CONTENT_TYPE.to_string(), DEFAULT_CONTENT_TYPE.to_string())];

    for (name, value) in headers {
        match merged
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(entry) => *entry = (name.clone(), value.clone()),
            None => merged.push((name.clone(), value.clone())),
        }
    }

    if let Some(token) = token {
        merged.retain(|(name, _)| !name.eq_ignore_ascii_case(AUTHORIZATION));
        merged.push((AUTHORIZATION.to_string(), format!("Bearer {token}")));
    }
    merged
}

/// Resolves the error message for a non-2xx response
///
/// * body is JSON with a usable `error` field: that value
/// * body is JSON without one: `HTTP error! status: <code>`
/// * body is not JSON: `status_text`, or `HTTP error! status: <code>` when it is missing or empty
pub fn error_message(status: StatusCode, status_text: Option<&str>, body: &[u8]) -> String {
    let fallback = format!("HTTP error! status: {}", status.as_u16());
    match serde_json::from_slice::<Value>(body) {
        Ok(data) => {
            debug!("Error response data: {}", data);
            error_field(&data).unwrap_or(fallback)
        }
        Err(_) => status_text
            .filter(|text| !text.is_empty())
            .map(str::to_string)
            .unwrap_or(fallback),
    }
}

/// Status text of a response as sent by the server
///
/// hyper only records the reason phrase when it differs from the canonical one, so the
/// canonical reason for the code is used when none was recorded.
pub fn status_text(response: &Response) -> Option<String> {
    match response.extensions().get::<ReasonPhrase>() {
        Some(reason) => Some(String::from_utf8_lossy(reason.as_bytes()).into_owned()),
        None => response.status().canonical_reason().map(str::to_string),
    }
}

fn error_field(data: &Value) -> Option<String> {
    match data.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

fn masked(headers: &[(String, String)]) -> Vec<(&str, &str)> {
    headers
        .iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case(AUTHORIZATION) {
                (name.as_str(), "Bearer ***")
            } else {
                (name.as_str(), value.as_str())
            }
        })
        .collect()
}

/// Sends a request to `base_url + endpoint`
///
/// This is the single primitive every API call goes through. It performs no retries and
/// sets no timeout.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `base_url` - API base URL, e.g. `http://localhost:8083/api/v1`
/// * `endpoint` - Path appended verbatim to the base URL, e.g. `/books?status=read`
/// * `options` - Method, headers, body and query of the request
/// * `token` - Bearer token read for this request, if any
///
/// # Returns
///
/// * `Ok(Response)` - 2xx response, body not yet consumed
/// * `Err(AppError::Http)` - non-2xx response with a normalized message and its status
/// * `Err(AppError::Network)` - transport failure
pub async fn make_http_request(
    client: &Client,
    base_url: &str,
    endpoint: &str,
    options: RequestOptions,
    token: Option<&str>,
) -> Result<Response, AppError> {
    let url = format!("{base_url}{endpoint}");
    let headers = build_headers(&options.headers, token);

    debug!(
        "Making API request: {} {} headers={:?}",
        options.method,
        url,
        masked(&headers)
    );

    let mut request = client.request(options.method, &url);

    for (name, value) in &headers {
        request = request.header(name.as_str(), value.as_str());
    }

    if !options.query.is_empty() {
        request = request.query(&options.query);
    }

    if let Some(body) = &options.body {
        request = request.body(serde_json::to_vec(body)?);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("API response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let text = status_text(&response);
    let body = response.bytes().await?;
    Err(AppError::http(error_message(status, text.as_deref(), &body), status))
}

/// Parses a successful response body
///
/// # Errors
/// * [`AppError::Json`] when the body is not valid JSON
/// * [`AppError::Deserialization`] when the JSON does not match `T`
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let body = response.bytes().await?;
    let data: Value = serde_json::from_slice(&body)?;
    debug!("API response data: {}", data);
    decode(data)
}

/// Decodes a parsed JSON value into the requested shape
pub fn decode<T: DeserializeOwned>(data: Value) -> Result<T, AppError> {
    serde_json::from_value(data).map_err(|e| AppError::Deserialization(e.to_string()))
}
