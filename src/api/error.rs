//! API error types for the Sigpair admin client.

use thiserror::Error;

use crate::auth::AuthError;

/// API-specific error type for the Sigpair admin client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP/network error from reqwest
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid request parameters (400)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Admin token rejected (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Permission denied (403)
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Resource already exists (409)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Too many requests (429)
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Server-side error (5xx)
    #[error("Server error: {0}")]
    ServerError(String),

    /// Unexpected HTTP status code
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(u16, String),

    /// Successful response whose body does not match the expected schema
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid parameter provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Key decoding or token signing failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Result type alias for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error response format from the node.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[serde(default, alias = "error")]
    pub message: Option<String>,
    /// Additional error details
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorResponse {
    /// Parse an error body, falling back to the raw text when it is not JSON.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .filter(|r| r.message.is_some() || r.details.is_some())
            .unwrap_or_else(|| Self {
                message: Some(body.to_string()),
                details: None,
            })
    }

    /// The error message, preferring `message` over `details`; `None` when both are empty.
    pub fn message(&self) -> Option<String> {
        self.message
            .clone()
            .or_else(|| self.details.clone())
            .filter(|m| !m.is_empty())
    }

    /// Get the error message, or "Unknown error" when the body carried none.
    pub fn get_message(&self) -> String {
        self.message().unwrap_or_else(|| "Unknown error".to_string())
    }
}
