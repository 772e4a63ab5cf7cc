//! Views the session flows can move to

use std::fmt;

/// Destination views reachable from the session flows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    /// Landing view after a successful login
    Books,
}

impl Route {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Books => "/books",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// View transitions, handled by whatever owns the screen (a router, a terminal)
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_display_as_paths() {
        assert_eq!(Route::Login.to_string(), "/login");
        assert_eq!(Route::Register.to_string(), "/register");
        assert_eq!(Route::Books.to_string(), "/books");
    }
}
