//! Authentication module

pub mod context;

// Re-export commonly used items
pub use context::{AuthContext, AuthProvider, SessionServices, use_auth};
