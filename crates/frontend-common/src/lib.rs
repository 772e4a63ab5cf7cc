//! Browser-side pieces shared by the Bookshelf frontend

pub mod auth;
pub mod client;
pub mod config;
pub mod navigation;
pub mod storage;

pub use auth::{AuthContext, AuthProvider, SessionServices};
pub use client::create_api_client;
pub use config::AuthConfig;
pub use navigation::{AppRoute, RouterNavigator, book_menu_entries, use_router_navigator};
pub use storage::LocalStorageTokenStore;
