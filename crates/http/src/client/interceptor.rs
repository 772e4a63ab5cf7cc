//! Bearer-token request interceptor

use bookshelf_core::{SharedTokenStore, TokenStore};
use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use tracing::{trace, warn};

/// Prefix of the `Authorization` value. The token is appended directly,
/// without a separating space, matching what the API currently accepts.
pub const BEARER_PREFIX: &str = "Bearer";

/// `Authorization` header value for `token`
pub fn bearer_value(token: &str) -> String {
    format!("{BEARER_PREFIX}{token}")
}

/// Adds the session token to every outgoing request
#[derive(Clone)]
pub struct TokenInterceptor {
    store: SharedTokenStore,
}

impl TokenInterceptor {
    pub fn new(store: SharedTokenStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &SharedTokenStore {
        &self.store
    }

    /// Decorate `request` with the current token.
    ///
    /// Without a token the request passes through untouched. A token that
    /// cannot be carried in a header is logged and the request is forwarded
    /// as is.
    pub fn intercept(&self, mut request: Request) -> Request {
        let Some(token) = self.store.active_token() else {
            trace!(url = %request.url(), "No session token, forwarding request unchanged");
            return request;
        };

        match HeaderValue::from_str(&bearer_value(&token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(e) => {
                warn!(url = %request.url(), "Session token is not a valid header value: {e}");
            }
        }
        request
    }
}

impl std::fmt::Debug for TokenInterceptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenInterceptor")
            .field("authenticated", &self.store.is_authenticated())
            .finish()
    }
}
