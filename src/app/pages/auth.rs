use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant};
use crate::app::routes::Route;
use crate::config::ClientConfig;
use crate::domain::models::Credentials;
use crate::shared::hooks::use_auth;
use crate::shared::state::AuthState;

/// Sign-in page at `/auth`
#[component]
pub fn SignIn() -> Element {
    let auth = use_auth();
    let config = use_context::<ClientConfig>();

    let content = match auth.state() {
        AuthState::SignedIn(user) => {
            let auth = auth.clone();
            rsx! {
                p { class: "c-auth__status", "Signed in as {user.username}" }
                div { class: "c-auth__actions",
                    if user.is_admin {
                        Link { to: Route::Admin {}, class: "c-button c-button--primary", "Go to admin" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            let auth = auth.clone();
                            spawn(async move {
                                auth.sign_out().await;
                            });
                        },
                        "Sign out"
                    }
                }
            }
        }
        _ => rsx! { SignInForm {} },
    };

    rsx! {
        div { class: "c-page c-page--centered",
            section { class: "c-auth",
                Link { to: Route::Catalog {}, class: "c-auth__brand", "{config.brand}" }
                {content}
            }
        }
    }
}

#[component]
fn SignInForm() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let credentials = match Credentials::new(&username(), &password()) {
            Ok(credentials) => credentials,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        let auth = auth.clone();
        submitting.set(true);
        error.set(None);
        spawn(async move {
            match auth.sign_in(credentials).await {
                Ok(user) => {
                    password.set(String::new());
                    if user.is_admin {
                        nav.push(Route::Admin {});
                    } else {
                        nav.push(Route::Catalog {});
                    }
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        form { class: "c-auth__form", onsubmit: on_submit,
            h1 { class: "c-auth__title", "Sign in" }
            label { class: "c-field",
                span { class: "c-field__label", "Username" }
                input {
                    class: "c-field__input",
                    r#type: "text",
                    name: "username",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
            }
            label { class: "c-field",
                span { class: "c-field__label", "Password" }
                input {
                    class: "c-field__input",
                    r#type: "password",
                    name: "password",
                    autocomplete: "current-password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            if let Some(message) = error() {
                p { class: "c-auth__error", role: "alert", "{message}" }
            }
            Button {
                variant: ButtonVariant::Primary,
                submit: true,
                disabled: submitting(),
                if submitting() { "Signing in..." } else { "Sign in" }
            }
        }
    }
}
