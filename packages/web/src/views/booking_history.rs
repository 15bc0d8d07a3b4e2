//! The signed-in user's bookings, newest first as the server returns them.

use api::Backend;
use dioxus::prelude::*;
use ui::{
    fetch_if_signed_in, use_auth, use_backend, ErrorBanner, Pager, Pagination, Spinner, PAGE_SIZE,
};

use super::{use_expire_on_unauthorized, use_require_auth};
use crate::Route;

#[component]
pub fn BookingHistory() -> Element {
    let authenticated = use_require_auth();
    let auth = use_auth();
    let backend = use_backend();
    let page = use_signal(|| 0usize);

    let bookings = use_resource(move || {
        let backend = backend.clone();
        let signed_in = auth.read().is_authenticated();
        fetch_if_signed_in(signed_in, async move { backend.list_bookings().await })
    });
    use_expire_on_unauthorized(bookings);

    if !authenticated {
        return rsx! {};
    }

    let list = match bookings.cloned().flatten() {
        None => return rsx! { Spinner {} },
        Some(Err(e)) => {
            tracing::error!("{}", e);
            return rsx! { ErrorBanner { message: e.to_string() } };
        }
        Some(Ok(list)) => list,
    };

    if list.is_empty() {
        return rsx! {
            section {
                h1 { "My bookings" }
                p {
                    class: "muted",
                    "You have no bookings yet. "
                    Link { to: Route::Home {}, "Find a table" }
                }
            }
        };
    }

    let pagination = Pagination::new(list.len(), PAGE_SIZE);
    let current = pagination.clamp(page());
    let visible = pagination.items(&list, current).to_vec();

    rsx! {
        section {
            h1 { "My bookings" }
            table {
                class: "booking-table",
                thead {
                    tr {
                        th { "Restaurant" }
                        th { "Date" }
                        th { "Time" }
                        th { "Guests" }
                        th { "Status" }
                    }
                }
                tbody {
                    for booking in visible {
                        tr {
                            key: "{booking.id}",
                            td {
                                Link {
                                    to: Route::RestaurantPage { id: booking.restaurant_id },
                                    "{booking.restaurant_label()}"
                                }
                            }
                            td { "{booking.date}" }
                            td { "{booking.time}" }
                            td { "{booking.guests}" }
                            td { "{booking.status_label()}" }
                        }
                    }
                }
            }
            Pager { pagination: pagination, page: page }
        }
    }
}
