//! Client error types and HTTP status classification.

use reqwest::StatusCode;

/// Result type for ChartMogul client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the ChartMogul API.
///
/// Non-2xx responses are classified by status code alone; the raw response
/// body is carried verbatim as the message.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request method is not one of GET, POST, PUT, DELETE.
    #[error("request method {0} not supported")]
    UnsupportedMethod(String),

    /// Network or timeout failure without a classified HTTP status.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the request payload (HTTP 400 or 422).
    #[error("invalid schema: {0}")]
    SchemaInvalid(String),

    /// The credentials were missing or wrong (HTTP 401).
    #[error("unauthorized user: {0}")]
    UnauthorizedUser(String),

    /// The request could not be fulfilled (HTTP 402).
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The credentials do not grant access to the resource (HTTP 403).
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The resource does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response, and rejected inbound requests.
    #[error("chartmogul error: {0}")]
    Generic(String),

    /// A payload or response body failed to (de)serialize as JSON.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Classify a non-2xx response by its status code.
    ///
    /// The status code is the sole discriminant; `body` becomes the message
    /// and is never parsed for routing.
    #[must_use]
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status.as_u16() {
            400 | 422 => Error::SchemaInvalid(body),
            401 => Error::UnauthorizedUser(body),
            402 => Error::RequestFailed(body),
            403 => Error::Forbidden(body),
            404 => Error::NotFound(body),
            _ => Error::Generic(body),
        }
    }
}
