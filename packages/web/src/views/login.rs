//! Login page view with email/password form and "remember me".

use api::Backend;
use dioxus::prelude::*;
use store::StorageScope;
use ui::forms::validate_login;
use ui::{use_auth, use_backend, ErrorBanner};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let backend = use_backend();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect home
    use_effect(move || {
        if auth.read().is_authenticated() {
            nav.replace(Route::Home {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();
            if let Err(message) = validate_login(&e, &p) {
                error.set(Some(message));
                return;
            }

            loading.set(true);
            match backend.login(&e, &p).await {
                Ok(response) => {
                    let scope = StorageScope::from_remember_me(remember_me());
                    auth.write().login(response.token, response.user, scope);
                    nav.replace(Route::Home {});
                }
                Err(err) => {
                    tracing::info!("Login rejected: {}", err.root_message());
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-card",
                h2 { "Login" }

                form {
                    onsubmit: handle_login,
                    class: "form",

                    if let Some(err) = error() {
                        ErrorBanner { message: err }
                    }

                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        value: email(),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        value: password(),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    div {
                        class: "form-check",
                        input {
                            id: "remember-me",
                            r#type: "checkbox",
                            checked: remember_me(),
                            onchange: move |_| remember_me.set(!remember_me()),
                        }
                        label { r#for: "remember-me", "Remember me" }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Register Now" }
                }
            }
        }
    }
}
