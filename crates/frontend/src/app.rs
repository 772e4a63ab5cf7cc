use crate::auth_guard::RequireAuth;
use crate::pages::{BooksPage, LoginPage, RegisterPage};
use bookshelf_frontend_common::{AppRoute, AuthProvider, SessionServices};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub services: Rc<SessionServices>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider services={props.services.clone()}>
                <Switch<AppRoute> render={switch} />
            </AuthProvider>
        </BrowserRouter>
    }
}

fn switch(route: AppRoute) -> Html {
    match route {
        AppRoute::Home => html! { <Redirect<AppRoute> to={AppRoute::Books} /> },
        AppRoute::Login => html! { <LoginPage /> },
        AppRoute::Register => html! { <RegisterPage /> },
        AppRoute::Books => html! {
            <RequireAuth>
                <BooksPage />
            </RequireAuth>
        },
        AppRoute::BookSection { section } => html! {
            <RequireAuth>
                <BooksPage section={Some(section)} />
            </RequireAuth>
        },
        AppRoute::NotFound => html! {
            <div class="container mt-5">
                <h1>{"Page not found"}</h1>
                <Link<AppRoute> to={AppRoute::Books}>{"Back to books"}</Link<AppRoute>>
            </div>
        },
    }
}
