//! Authentication guard component for protected routes

use bookshelf_core::TokenStore;
use bookshelf_frontend_common::AppRoute;
use bookshelf_frontend_common::auth::use_auth;
use yew::prelude::*;
use yew_router::prelude::Redirect;

/// RequireAuth component - simple auth guard
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Shows children with a session token present, otherwise redirects to login.
///
/// The store is read on every render, so a token stored by the login flow
/// is honoured on the very next route.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let auth = use_auth();

    if auth.store.is_authenticated() {
        return html! { <>{ props.children.clone() }</> };
    }

    html! { <Redirect<AppRoute> to={AppRoute::Login} /> }
}
