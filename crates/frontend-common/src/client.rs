//! Client configuration and initialization

use crate::config::AuthConfig;
use bookshelf_core::SharedTokenStore;
pub use bookshelf_http::ClientError;
use bookshelf_http::ApiClient;
use web_sys::window;

/// Get the base URL for API calls
fn get_base_url() -> String {
    // Try to get from window location
    let origin = window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();

    // Falls back to relative URLs
    format!("{origin}{}", AuthConfig::API_PREFIX)
}

/// Create the API client for this page, intercepting with `store`
pub fn create_api_client(store: SharedTokenStore) -> Result<ApiClient, ClientError> {
    ApiClient::builder()
        .base_url(get_base_url())
        .token_store(store)
        .build()
}
