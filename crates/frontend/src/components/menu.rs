//! Side navigation menu

use bookshelf_core::{NavMenu, logout};
use bookshelf_frontend_common::auth::use_auth;
use bookshelf_frontend_common::{book_menu_entries, use_router_navigator};
use yew::prelude::*;

fn current_location() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

#[function_component(Menu)]
pub fn menu() -> Html {
    let auth = use_auth();
    let navigator = use_router_navigator();
    let menu = use_state(|| NavMenu::for_location(book_menu_entries(), &current_location()));

    let on_select = {
        let menu = menu.clone();
        let navigator = navigator.clone();
        Callback::from(move |index: usize| {
            let mut next = (*menu).clone();
            if !next.select(index) {
                return;
            }
            if let (Some(navigator), Some(entry)) = (&navigator, next.entries().get(index)) {
                navigator.push_href(&entry.href);
            }
            menu.set(next);
        })
    };

    let on_logout = Callback::from(move |_: MouseEvent| {
        let Some(navigator) = &navigator else {
            return;
        };
        logout(auth.store.as_ref(), navigator);
    });

    html! {
        <nav class="navbar navbar-expand-lg bg-body-tertiary">
            <div class="container-fluid">
                <span class="navbar-brand">{"Book Social Network"}</span>
                <ul class="navbar-nav me-auto">
                    { for menu.entries().iter().enumerate().map(|(index, entry)| {
                        let onclick = on_select.reform(move |e: MouseEvent| {
                            e.prevent_default();
                            index
                        });
                        html! {
                            <li class="nav-item">
                                <a
                                    class={classes!("nav-link", menu.is_active(index).then_some("active"))}
                                    href={entry.href.clone()}
                                    {onclick}
                                >
                                    { entry.label.clone() }
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <button type="button" class="btn btn-outline-danger" onclick={on_logout}>
                    {"Logout"}
                </button>
            </div>
        </nav>
    }
}
