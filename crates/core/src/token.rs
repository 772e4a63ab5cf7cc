//! Session token storage
//!
//! A token store is a single named slot holding at most one session token.
//! Components that need the token receive a [`SharedTokenStore`] explicitly
//! instead of reaching for global state.

use std::sync::{Arc, Mutex, PoisonError};

/// Fixed key under which the session token is persisted
pub const TOKEN_KEY: &str = "token";

/// Single-slot holder for the current session token
pub trait TokenStore: Send + Sync {
    /// Current token, or `None` when unauthenticated
    fn get(&self) -> Option<String>;

    /// Replace the current token
    fn set(&self, token: &str);

    /// Remove the current token
    fn clear(&self);

    /// Token usable for requests. An empty stored value counts as absent.
    fn active_token(&self) -> Option<String> {
        self.get().filter(|token| !token.is_empty())
    }

    /// Whether a usable token is present
    fn is_authenticated(&self) -> bool {
        self.active_token().is_some()
    }
}

/// Token store shared between the interceptor and the session flows
pub type SharedTokenStore = Arc<dyn TokenStore>;

/// In-memory token store. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(token.into())),
        }
    }

    /// Wrap in an `Arc` for sharing
    pub fn shared(self) -> SharedTokenStore {
        Arc::new(self)
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    fn clear(&self) {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take();
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileTokenStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use super::{TOKEN_KEY, TokenStore};
    use crate::error::CoreResult;
    use std::fs::{self, OpenOptions};
    use std::io::{self, ErrorKind, Write};
    use std::path::{Path, PathBuf};
    use tracing::{debug, warn};

    /// Token store backed by a plain-text file, one token per file
    #[derive(Debug, Clone)]
    pub struct FileTokenStore {
        path: PathBuf,
    }

    impl FileTokenStore {
        /// Open the store at `<dir>/token`, creating `dir` if needed
        pub fn in_dir(dir: impl AsRef<Path>) -> CoreResult<Self> {
            let dir = dir.as_ref();
            fs::create_dir_all(dir)?;
            Ok(Self {
                path: dir.join(TOKEN_KEY),
            })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        /// Write to a sibling file readable only by the owner, then rename it
        /// over the token file so readers never see a partial token
        fn replace_contents(&self, token: &str) -> io::Result<()> {
            let staging = self.path.with_extension("tmp");

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true);
            #[cfg(unix)]
            {
                use std::os::unix::fs::OpenOptionsExt;
                options.mode(0o600);
            }
            let mut file = options.open(&staging)?;

            // The mode above only applies when the file is created
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                file.set_permissions(fs::Permissions::from_mode(0o600))?;
            }

            file.write_all(token.as_bytes())?;
            file.sync_all()?;
            drop(file);

            fs::rename(&staging, &self.path)
        }
    }

    impl TokenStore for FileTokenStore {
        fn get(&self) -> Option<String> {
            match fs::read_to_string(&self.path) {
                Ok(contents) => Some(contents.trim_end_matches(['\r', '\n']).to_string()),
                Err(err) if err.kind() == ErrorKind::NotFound => None,
                Err(err) => {
                    warn!(path = %self.path.display(), "Failed to read token file: {err}");
                    None
                }
            }
        }

        fn set(&self, token: &str) {
            debug!(path = %self.path.display(), "Persisting session token");
            if let Err(err) = self.replace_contents(token) {
                warn!(path = %self.path.display(), "Failed to write token file: {err}");
            }
        }

        fn clear(&self) {
            match fs::remove_file(&self.path) {
                Ok(()) => debug!(path = %self.path.display(), "Removed session token"),
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => {
                    warn!(path = %self.path.display(), "Failed to remove token file: {err}");
                }
            }
        }
    }
}
