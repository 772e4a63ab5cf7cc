//! Client error types

use bookshelf_core::{AuthFailure, ErrorResponse};
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status with a structured payload
    #[error("Server rejected request ({status})")]
    Api { status: u16, body: ErrorResponse },

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from an HTTP status and the raw response body.
    ///
    /// Bodies that decode to an error payload carrying messages become
    /// [`ClientError::Api`]; anything else falls back to a status-based variant.
    pub fn from_response(status: reqwest::StatusCode, body: String) -> Self {
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(payload) if payload.messages().is_some() => Self::Api {
                status: status.as_u16(),
                body: payload,
            },
            _ => Self::from_status(status, body),
        }
    }

    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        let message = if message.is_empty() {
            status.to_string()
        } else {
            message
        };
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }
}

impl From<ClientError> for AuthFailure {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Api { body, .. } => Self::Rejected(body),
            other => Self::Unavailable(other.to_string()),
        }
    }
}
