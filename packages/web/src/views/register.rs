//! Registration page view with username/email/password form.

use api::{Backend, RegisterRequest};
use dioxus::prelude::*;
use store::StorageScope;
use ui::forms::validate_registration;
use ui::{use_auth, use_backend, ErrorBanner, SuccessBanner, REDIRECT_DELAY};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut auth = use_auth();
    let backend = use_backend();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            error.set(None);

            let u = username().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            let cp = confirm_password();

            if let Err(message) = validate_registration(&u, &e, &p, &cp) {
                error.set(Some(message));
                return;
            }

            loading.set(true);
            let request = RegisterRequest {
                username: u,
                email: e,
                password: p,
            };
            match backend.register(&request).await {
                Ok(response) => {
                    // Auto login after registration, for this tab only
                    auth.write()
                        .login(response.token, response.user, StorageScope::Tab);
                    success.set(Some(
                        "Registration successful! Taking you to the restaurants...".to_string(),
                    ));
                    ui::sleep(REDIRECT_DELAY).await;
                    nav.replace(Route::Home {});
                }
                Err(err) => {
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
                h2 { "Create your Account" }

                if let Some(message) = success() {
                    SuccessBanner { message: message }
                }

                form {
                    onsubmit: handle_register,
                    class: "form",

                    if let Some(err) = error() {
                        ErrorBanner { message: err }
                    }

                    label { r#for: "username", "Username" }
                    input {
                        id: "username",
                        r#type: "text",
                        value: username(),
                        oninput: move |evt: FormEvent| username.set(evt.value()),
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

                    label { r#for: "confirm-password", "Confirm Password" }
                    input {
                        id: "confirm-password",
                        r#type: "password",
                        value: confirm_password(),
                        oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Create Account" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in" }
                }
            }
        }
    }
}
