//! Bookshelf HTTP client

pub mod auth;
pub mod error;
pub mod interceptor;

use bookshelf_core::SharedTokenStore;
use error::ClientError;
use interceptor::TokenInterceptor;
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::debug;

const DEFAULT_USER_AGENT: &str = concat!("bookshelf-client/", env!("CARGO_PKG_VERSION"));

/// Bookshelf API client.
///
/// Every request sent through [`ApiClient::execute`] passes the token
/// interceptor first, so endpoints never attach credentials themselves.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    interceptor: Option<TokenInterceptor>,
}

impl ApiClient {
    /// Create a new client without a token store
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    /// Create a new client builder
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Token store consulted for each request, if any
    pub fn token_store(&self) -> Option<&SharedTokenStore> {
        self.interceptor.as_ref().map(TokenInterceptor::store)
    }

    /// Create a request builder for `path` relative to the base URL
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Build, intercept and send a request, decoding a JSON success body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let mut request = request.build()?;
        if let Some(interceptor) = &self.interceptor {
            request = interceptor.intercept(request);
        }
        debug!(method = %request.method(), url = %request.url(), "Sending request");

        let response = self.client.execute(request).await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            debug!(%status, "Request failed");
            Err(ClientError::from_response(status, body))
        }
    }

    /// GET `path` and return the JSON body as is
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, ClientError> {
        let request = self.request(reqwest::Method::GET, path);
        self.execute(request).await
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ApiClientBuilder {
    base_url: Option<String>,
    token_store: Option<SharedTokenStore>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ApiClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Attach the token store read by the request interceptor
    pub fn token_store(mut self, store: SharedTokenStore) -> Self {
        self.token_store = Some(store);
        self
    }

    /// Set the request timeout (ignored on wasm)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut client_builder = ClientBuilder::new()
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        #[cfg(target_arch = "wasm32")]
        let _ = self.timeout; // Timeouts not supported on WASM

        let client = client_builder.build()?;

        Ok(ApiClient {
            client,
            base_url,
            interceptor: self.token_store.map(TokenInterceptor::new),
        })
    }
}
