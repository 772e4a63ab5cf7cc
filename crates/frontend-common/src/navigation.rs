//! Application routes and the router-backed navigator

use bookshelf_core::{NavEntry, Navigator, Route};
use yew::prelude::*;
use yew_router::prelude::*;

/// Routes of the single-page app
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum AppRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/books")]
    Books,
    #[at("/books/:section")]
    BookSection { section: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Route> for AppRoute {
    fn from(route: Route) -> Self {
        match route {
            Route::Login => Self::Login,
            Route::Register => Self::Register,
            Route::Books => Self::Books,
        }
    }
}

/// Side menu links
pub fn book_menu_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::new("All books", "/books"),
        NavEntry::new("My books", "/books/my-books"),
        NavEntry::new("My waiting list", "/books/my-waiting-list"),
        NavEntry::new("My returned books", "/books/my-returned-books"),
        NavEntry::new("My borrowed books", "/books/my-borrowed-books"),
    ]
}

/// [`Navigator`] that pushes onto the browser history through `yew-router`
#[derive(Clone)]
pub struct RouterNavigator {
    inner: yew_router::navigator::Navigator,
}

impl RouterNavigator {
    pub fn new(inner: yew_router::navigator::Navigator) -> Self {
        Self { inner }
    }

    /// Push an arbitrary menu href, falling back to the not-found page
    pub fn push_href(&self, href: &str) {
        let route = AppRoute::recognize(href).unwrap_or(AppRoute::NotFound);
        self.inner.push(&route);
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "Navigating");
        self.inner.push(&AppRoute::from(route));
    }
}

/// Router navigator for the current component, `None` outside a router
#[hook]
pub fn use_router_navigator() -> Option<RouterNavigator> {
    use_navigator().map(RouterNavigator::new)
}
