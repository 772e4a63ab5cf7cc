//! Login, logout and register flows

use crate::auth::{AuthFailure, AuthenticationApi, AuthenticationRequest};
use crate::navigation::{Navigator, Route};
use crate::token::TokenStore;
use tracing::{debug, info};

/// Result of a login attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    Failed,
}

/// State behind the login page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub request: AuthenticationRequest,
    errors: Vec<String>,
    in_flight: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            request: AuthenticationRequest::new(email, password),
            ..Self::default()
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.request.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.request.password = password.into();
    }

    /// Messages from the last failed attempt
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Show the errors of an attempt made on a copy of this form, keeping
    /// whatever was typed since
    pub fn replace_errors(&mut self, errors: Vec<String>) {
        self.errors = errors;
    }

    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Submit the current credentials.
    ///
    /// The error list is cleared before the call and replaced wholesale on
    /// failure. On success the token goes into `store` and the view moves to
    /// the landing page.
    pub async fn login<A>(
        &mut self,
        api: &A,
        store: &dyn TokenStore,
        navigator: &dyn Navigator,
    ) -> LoginOutcome
    where
        A: AuthenticationApi + ?Sized,
    {
        self.errors.clear();
        self.in_flight = true;
        debug!(email = %self.request.email, "Submitting credentials");

        let result = api
            .authenticate(&self.request)
            .await
            .and_then(|response| response.token.ok_or(AuthFailure::MissingToken));
        self.in_flight = false;

        match result {
            Ok(token) => {
                store.set(&token);
                info!(email = %self.request.email, "Login succeeded");
                navigator.navigate(Route::Books);
                LoginOutcome::Authenticated
            }
            Err(failure) => {
                info!(email = %self.request.email, "Login failed: {failure}");
                self.errors = failure.messages();
                LoginOutcome::Failed
            }
        }
    }
}

/// Move to the registration view
pub fn register(navigator: &dyn Navigator) {
    navigator.navigate(Route::Register);
}

/// Drop the session token and return to the login view
pub fn logout(store: &dyn TokenStore, navigator: &dyn Navigator) {
    store.clear();
    info!("Logged out");
    navigator.navigate(Route::Login);
}
