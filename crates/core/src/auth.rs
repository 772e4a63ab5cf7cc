//! Authentication endpoint contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Credentials submitted by the login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationRequest {
    pub email: String,
    pub password: String,
}

impl AuthenticationRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Successful authentication payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Error payload returned by the server on a failed call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_error_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_error_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
}

impl ErrorResponse {
    /// User-facing messages carried by the payload.
    ///
    /// A `validationErrors` list wins whenever it is present, even when empty;
    /// otherwise a lone `errorMsg` becomes a one-element list. `None` when the
    /// payload carries neither.
    pub fn messages(&self) -> Option<Vec<String>> {
        if let Some(errors) = &self.validation_errors {
            return Some(errors.clone());
        }
        self.error_msg.as_ref().map(|msg| vec![msg.clone()])
    }
}

/// Why an authentication attempt did not yield a token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    /// The server answered with an error payload
    #[error("Authentication rejected")]
    Rejected(ErrorResponse),

    /// The call failed before a usable answer came back
    #[error("{0}")]
    Unavailable(String),

    /// The server answered success but sent no token
    #[error("Authentication response did not include a token")]
    MissingToken,
}

impl AuthFailure {
    /// Messages to show in the login form's error list
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Rejected(body) => body
                .messages()
                .unwrap_or_else(|| vec![self.to_string()]),
            Self::Unavailable(_) | Self::MissingToken => vec![self.to_string()],
        }
    }
}

/// Remote authentication endpoint
#[async_trait(?Send)]
pub trait AuthenticationApi {
    async fn authenticate(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResponse, AuthFailure>;
}
