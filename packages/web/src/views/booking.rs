//! Booking form for one restaurant.

use api::{Backend, BookingRequest};
use dioxus::prelude::*;
use ui::forms::{validate_booking, MAX_GUESTS};
use ui::{expire_on_unauthorized, fetch_if_signed_in, use_auth, use_backend, ErrorBanner};

use super::use_require_auth;
use crate::Route;

#[component]
pub fn BookingPage(restaurant_id: u64) -> Element {
    let authenticated = use_require_auth();
    let mut auth = use_auth();
    let backend = use_backend();
    let nav = use_navigator();
    let mut date = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut guests = use_signal(|| "2".to_string());
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let restaurant = use_resource({
        let backend = backend.clone();
        use_reactive!(|(restaurant_id,)| {
            let backend = backend.clone();
            let signed_in = auth.read().is_authenticated();
            fetch_if_signed_in(signed_in, async move {
                backend.get_restaurant(restaurant_id).await
            })
        })
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let backend = backend.clone();
        spawn(async move {
            error.set(None);

            let party = match validate_booking(&date(), &time(), &guests()) {
                Ok(party) => party,
                Err(message) => {
                    error.set(Some(message));
                    return;
                }
            };

            loading.set(true);
            let request = BookingRequest {
                restaurant_id,
                date: date(),
                time: time(),
                guests: party,
            };
            match backend.create_booking(&request).await {
                Ok(booking) => {
                    tracing::info!("Booking {} created", booking.id);
                    nav.push(Route::BookingConfirmation { id: booking.id });
                }
                Err(err) => {
                    loading.set(false);
                    if expire_on_unauthorized(&mut auth, &err) {
                        nav.replace(Route::Login {});
                        return;
                    }
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    if !authenticated {
        return rsx! {};
    }

    let heading = match restaurant.cloned().flatten() {
        Some(Ok(restaurant)) => format!("Book a table at {}", restaurant.name),
        _ => "Book a table".to_string(),
    };

    rsx! {
        div {
            class: "form-container",
            div {
                class: "form-card",
                h2 { "{heading}" }

                form {
                    onsubmit: handle_submit,
                    class: "form",

                    if let Some(err) = error() {
                        ErrorBanner { message: err }
                    }

                    label { r#for: "date", "Date" }
                    input {
                        id: "date",
                        r#type: "date",
                        value: date(),
                        oninput: move |evt: FormEvent| date.set(evt.value()),
                    }

                    label { r#for: "time", "Time" }
                    input {
                        id: "time",
                        r#type: "time",
                        value: time(),
                        oninput: move |evt: FormEvent| time.set(evt.value()),
                    }

                    label { r#for: "guests", "Guests" }
                    input {
                        id: "guests",
                        r#type: "number",
                        min: "1",
                        max: "{MAX_GUESTS}",
                        value: guests(),
                        oninput: move |evt: FormEvent| guests.set(evt.value()),
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Booking..." } else { "Confirm Booking" }
                    }
                }

                Link {
                    to: Route::RestaurantPage { id: restaurant_id },
                    "Back to restaurant"
                }
            }
        }
    }
}
