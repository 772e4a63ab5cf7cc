//! Authentication API client methods

use super::{ApiClient, ClientError};
use async_trait::async_trait;
use bookshelf_core::{
    AuthFailure, AuthenticationApi, AuthenticationRequest, AuthenticationResponse,
};

/// Path of the credential exchange endpoint, relative to the API base URL
pub const AUTHENTICATE_PATH: &str = "/auth/authenticate";

impl ApiClient {
    /// Exchange email and password for a session token
    pub async fn authenticate(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResponse, ClientError> {
        let req = self
            .request(reqwest::Method::POST, AUTHENTICATE_PATH)
            .json(request);
        self.execute(req).await
    }
}

#[async_trait(?Send)]
impl AuthenticationApi for ApiClient {
    async fn authenticate(
        &self,
        request: &AuthenticationRequest,
    ) -> Result<AuthenticationResponse, AuthFailure> {
        Self::authenticate(self, request)
            .await
            .map_err(AuthFailure::from)
    }
}
