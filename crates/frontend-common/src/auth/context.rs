//! Session context and provider

use crate::client::{ClientError, create_api_client};
use crate::storage::LocalStorageTokenStore;
use bookshelf_core::SharedTokenStore;
use bookshelf_http::ApiClient;
use std::rc::Rc;
use std::sync::Arc;
use yew::prelude::*;

/// API client and token store handed to every page
pub struct SessionServices {
    pub api: ApiClient,
    pub store: SharedTokenStore,
}

impl SessionServices {
    pub fn new(api: ApiClient, store: SharedTokenStore) -> Self {
        Self { api, store }
    }

    /// Services for the running page: `localStorage` token store and an
    /// origin-relative API client reading from it
    pub fn browser() -> Result<Self, ClientError> {
        let store: SharedTokenStore = Arc::new(LocalStorageTokenStore::new());
        let api = create_api_client(store.clone())?;
        Ok(Self::new(api, store))
    }
}

// Identity comparison; services are created once per page.
impl PartialEq for SessionServices {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

/// Session context: the services shared by every page
pub type AuthContext = Rc<SessionServices>;

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub services: Rc<SessionServices>,
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    html! {
        <ContextProvider<AuthContext> context={props.services.clone()}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}
