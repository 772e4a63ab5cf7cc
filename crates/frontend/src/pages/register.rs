//! Registration view

use bookshelf_frontend_common::AppRoute;
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    html! {
        <div class="container d-flex justify-content-center align-items-center vh-100">
            <div class="card p-4 shadow" style="min-width: 360px;">
                <h3 class="text-center mb-3">{"Register"}</h3>
                <p>{"Account registration is handled by the book network service."}</p>
                <div>
                    {"Already have an account? "}
                    <Link<AppRoute> to={AppRoute::Login}>{"Login"}</Link<AppRoute>>
                </div>
            </div>
        </div>
    }
}
