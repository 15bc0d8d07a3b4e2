//! Home page: the paginated restaurant list.

use api::{Backend, RestaurantId};
use dioxus::prelude::*;
use ui::{
    fetch_if_signed_in, use_auth, use_backend, ErrorBanner, Pager, Pagination, RestaurantCard,
    Spinner, PAGE_SIZE,
};

use super::{use_expire_on_unauthorized, use_require_auth};
use crate::Route;

#[component]
pub fn Home() -> Element {
    let authenticated = use_require_auth();
    let auth = use_auth();
    let backend = use_backend();
    let nav = use_navigator();
    let page = use_signal(|| 0usize);

    let restaurants = use_resource(move || {
        let backend = backend.clone();
        let signed_in = auth.read().is_authenticated();
        fetch_if_signed_in(signed_in, async move { backend.list_restaurants().await })
    });
    use_expire_on_unauthorized(restaurants);

    if !authenticated {
        return rsx! {};
    }

    let body = match restaurants.cloned().flatten() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => {
            tracing::error!("{}", e);
            rsx! { ErrorBanner { message: e.to_string() } }
        }
        Some(Ok(list)) if list.is_empty() => rsx! {
            p { class: "muted", "No restaurants are taking bookings right now." }
        },
        Some(Ok(list)) => {
            let pagination = Pagination::new(list.len(), PAGE_SIZE);
            let current = pagination.clamp(page());
            let visible = pagination.items(&list, current).to_vec();

            rsx! {
                div {
                    class: "card-grid",
                    for restaurant in visible {
                        RestaurantCard {
                            key: "{restaurant.id}",
                            restaurant: restaurant,
                            on_select: move |id: RestaurantId| {
                                nav.push(Route::RestaurantPage { id });
                            },
                        }
                    }
                }
                Pager { pagination: pagination, page: page }
            }
        }
    };

    rsx! {
        section {
            h1 { "Find a table" }
            {body}
        }
    }
}
