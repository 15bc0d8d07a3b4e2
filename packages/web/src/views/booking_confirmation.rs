//! Confirmation screen shown after a booking is created.

use api::{Backend, Booking};
use dioxus::prelude::*;
use ui::icons::FaCircleCheck;
use ui::{fetch_if_signed_in, use_auth, use_backend, ErrorBanner, Icon, Spinner};

use super::{use_expire_on_unauthorized, use_require_auth};
use crate::Route;

#[component]
pub fn BookingConfirmation(id: u64) -> Element {
    let authenticated = use_require_auth();
    let auth = use_auth();
    let backend = use_backend();

    let bookings = use_resource(move || {
        let backend = backend.clone();
        let signed_in = auth.read().is_authenticated();
        fetch_if_signed_in(signed_in, async move { backend.list_bookings().await })
    });
    use_expire_on_unauthorized(bookings);

    if !authenticated {
        return rsx! {};
    }

    let booking = match bookings.cloned().flatten() {
        None => return rsx! { Spinner {} },
        Some(Err(e)) => {
            tracing::error!("{}", e);
            return rsx! { ErrorBanner { message: e.to_string() } };
        }
        Some(Ok(list)) => list.into_iter().find(|b| b.id == id),
    };

    rsx! {
        div {
            class: "confirmation",
            if let Some(booking) = booking {
                BookingSummary { booking: booking }
            } else {
                ErrorBanner { message: format!("Booking #{id} was not found.") }
            }
            nav {
                class: "confirmation-links",
                Link { to: Route::BookingHistory {}, "View all bookings" }
                Link { to: Route::Home {}, "Back to restaurants" }
            }
        }
    }
}

#[component]
fn BookingSummary(booking: Booking) -> Element {
    rsx! {
        div {
            class: "confirmation-card",
            h1 {
                Icon { icon: FaCircleCheck, width: 24, height: 24 }
                " Booking confirmed"
            }
            dl {
                dt { "Restaurant" }
                dd { "{booking.restaurant_label()}" }
                dt { "Date" }
                dd { "{booking.date}" }
                dt { "Time" }
                dd { "{booking.time}" }
                dt { "Party" }
                dd { "{booking.guests_label()}" }
                dt { "Status" }
                dd { "{booking.status_label()}" }
                dt { "Reference" }
                dd { "#{booking.id}" }
            }
        }
    }
}
