//! Browser-backed token store

use crate::config::AuthConfig;
use bookshelf_core::TokenStore;
use tracing::{debug, warn};
use web_sys::Storage;

/// Token store over `window.localStorage`.
///
/// The token is kept as a plain string under [`AuthConfig::TOKEN_KEY`], so it
/// survives page reloads. Without a usable `localStorage` the store behaves as
/// permanently empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl LocalStorageTokenStore {
    pub const fn new() -> Self {
        Self
    }
}

/// Get localStorage
fn get_local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        let storage = get_local_storage()?;
        match storage.get_item(AuthConfig::TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                warn!("Failed to read session token: {e:?}");
                None
            }
        }
    }

    fn set(&self, token: &str) {
        let Some(storage) = get_local_storage() else {
            warn!("localStorage unavailable, session token not persisted");
            return;
        };
        if let Err(e) = storage.set_item(AuthConfig::TOKEN_KEY, token) {
            warn!("Failed to persist session token: {e:?}");
        } else {
            debug!("Session token persisted");
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            if let Err(e) = storage.remove_item(AuthConfig::TOKEN_KEY) {
                warn!("Failed to remove session token: {e:?}");
            }
        }
    }
}
