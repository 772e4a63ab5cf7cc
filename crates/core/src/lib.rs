//! Bookshelf core: session token lifecycle and the flows built on it

pub mod auth;
pub mod error;
#[cfg(feature = "logging")]
pub mod logging;
pub mod menu;
pub mod navigation;
pub mod session;
pub mod token;

pub use auth::{
    AuthFailure, AuthenticationApi, AuthenticationRequest, AuthenticationResponse, ErrorResponse,
};
pub use error::{CoreError, CoreResult};
pub use menu::{NavEntry, NavMenu};
pub use navigation::{Navigator, Route};
pub use session::{LoginForm, LoginOutcome, logout, register};
#[cfg(not(target_arch = "wasm32"))]
pub use token::FileTokenStore;
pub use token::{MemoryTokenStore, SharedTokenStore, TOKEN_KEY, TokenStore};
