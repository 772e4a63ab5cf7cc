//! Bookshelf HTTP client
//!
//! A thin `reqwest` wrapper that runs every outgoing request through the
//! bearer-token interceptor and maps error responses into [`ClientError`].

pub mod client;

pub use client::auth::AUTHENTICATE_PATH;
pub use client::error::ClientError;
pub use client::interceptor::{BEARER_PREFIX, TokenInterceptor, bearer_value};
pub use client::{ApiClient, ApiClientBuilder};
