//! Login page

use bookshelf_core::{LoginForm, register};
use bookshelf_frontend_common::auth::use_auth;
use bookshelf_frontend_common::use_router_navigator;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Form contents plus the submit guard
#[derive(Clone, Debug, Default, PartialEq)]
struct LoginState {
    form: LoginForm,
    submitting: bool,
}

enum LoginAction {
    Email(String),
    Password(String),
    Submit,
    /// Errors of the finished attempt
    Finish(Vec<String>),
}

impl Reducible for LoginState {
    type Action = LoginAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LoginAction::Email(email) => next.form.set_email(email),
            LoginAction::Password(password) => next.form.set_password(password),
            LoginAction::Submit => next.submitting = true,
            LoginAction::Finish(errors) => {
                next.form.replace_errors(errors);
                next.submitting = false;
            }
        }
        Rc::new(next)
    }
}

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_auth();
    let navigator = use_router_navigator();
    let state = use_reducer(LoginState::default);

    let on_email_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(LoginAction::Email(input.value()));
        })
    };

    let on_password_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.dispatch(LoginAction::Password(input.value()));
        })
    };

    let on_submit = {
        let state = state.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(navigator) = navigator.clone() else {
                tracing::warn!("Login submitted outside a router");
                return;
            };
            if state.submitting {
                return;
            }

            let mut attempt = state.form.clone();
            state.dispatch(LoginAction::Submit);

            let state = state.clone();
            let services = auth.clone();
            wasm_bindgen_futures::spawn_local(async move {
                attempt
                    .login(&services.api, services.store.as_ref(), &navigator)
                    .await;
                state.dispatch(LoginAction::Finish(attempt.errors().to_vec()));
            });
        })
    };

    let on_register = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            register(navigator);
        }
    });

    let form = &state.form;
    html! {
        <div class="container d-flex justify-content-center align-items-center vh-100">
            <div class="card p-4 shadow" style="min-width: 360px;">
                <h3 class="text-center mb-3">{"Login"}</h3>
                if !form.errors().is_empty() {
                    <div class="alert alert-danger" role="alert">
                        { for form.errors().iter().map(|msg| html! { <p class="mb-0">{ msg.clone() }</p> }) }
                    </div>
                }
                <form onsubmit={on_submit}>
                    <div class="mb-3">
                        <label for="login" class="form-label">{"Email address"}</label>
                        <input
                            id="login"
                            type="email"
                            class="form-control"
                            placeholder="name@example.com"
                            value={form.request.email.clone()}
                            oninput={on_email_input}
                        />
                    </div>
                    <div class="mb-3">
                        <label for="password" class="form-label">{"Password"}</label>
                        <input
                            id="password"
                            type="password"
                            class="form-control"
                            value={form.request.password.clone()}
                            oninput={on_password_input}
                        />
                    </div>
                    <div class="d-flex justify-content-between">
                        <button type="submit" class="btn btn-primary" disabled={state.submitting}>
                            {"Sign in"}
                        </button>
                        <div>
                            {"Don't have an account? "}
                            <button type="button" class="btn btn-link" onclick={on_register}>
                                {"Register"}
                            </button>
                        </div>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<LoginState>, actions: Vec<LoginAction>) -> Rc<LoginState> {
        actions
            .into_iter()
            .fold(state, <LoginState as Reducible>::reduce)
    }

    #[test]
    fn typing_during_an_attempt_survives_its_result() {
        let state = apply(
            Rc::default(),
            vec![
                LoginAction::Email("old@example.com".into()),
                LoginAction::Submit,
                LoginAction::Email("new@example.com".into()),
                LoginAction::Password("retyped".into()),
                LoginAction::Finish(vec!["invalid credentials".into()]),
            ],
        );

        assert_eq!(state.form.request.email, "new@example.com");
        assert_eq!(state.form.request.password, "retyped");
        assert_eq!(state.form.errors(), ["invalid credentials".to_string()]);
        assert!(!state.submitting);
    }

    #[test]
    fn submit_guards_until_finished() {
        let state = apply(Rc::default(), vec![LoginAction::Submit]);
        assert!(state.submitting);

        let state = apply(state, vec![LoginAction::Finish(Vec::new())]);
        assert!(!state.submitting);
        assert!(state.form.errors().is_empty());
    }
}
