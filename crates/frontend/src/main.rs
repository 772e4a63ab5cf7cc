mod app;
mod auth_guard;
mod components;
mod pages;

use app::{App, AppProps};
use bookshelf_frontend_common::SessionServices;
use std::rc::Rc;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    match SessionServices::browser() {
        Ok(services) => {
            yew::Renderer::<App>::with_props(AppProps {
                services: Rc::new(services),
            })
            .render();
        }
        Err(e) => tracing::error!("Failed to create API client: {e}"),
    }
}
