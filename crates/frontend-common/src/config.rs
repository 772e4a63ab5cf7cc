//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// localStorage key for the session token
    pub const TOKEN_KEY: &'static str = bookshelf_core::TOKEN_KEY;

    /// Path prefix of the REST API, appended to the page origin
    pub const API_PREFIX: &'static str = "/api/v1";
}
