//! Restaurant details: gallery, contact info, opening hours and offers.

use api::{Backend, Offer, Restaurant};
use dioxus::prelude::*;
use ui::icons::{FaClock, FaLocationDot, FaPhone, FaTag, FaUtensils};
use ui::{use_backend, ErrorBanner, Icon, ImageGallery, Spinner};

use crate::Route;

#[component]
pub fn RestaurantPage(id: u64) -> Element {
    let backend = use_backend();

    let restaurant = use_resource(use_reactive!(|(id,)| {
        let backend = backend.clone();
        async move { backend.get_restaurant(id).await }
    }));

    match restaurant.cloned() {
        None => rsx! { Spinner {} },
        Some(Err(e)) => {
            tracing::error!("{}", e);
            rsx! {
                ErrorBanner { message: e.to_string() }
                Link { to: Route::Home {}, "Back to restaurants" }
            }
        }
        Some(Ok(restaurant)) => rsx! {
            RestaurantDetails { restaurant: restaurant }
        },
    }
}

#[component]
fn RestaurantDetails(restaurant: Restaurant) -> Element {
    let nav = use_navigator();
    let id = restaurant.id;

    rsx! {
        article {
            class: "restaurant-details",

            header {
                class: "restaurant-header",
                h1 { "{restaurant.name}" }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.push(Route::BookingPage { restaurant_id: id });
                    },
                    "Book a Table"
                }
            }

            ImageGallery {
                images: restaurant.images.clone(),
                alt: restaurant.name.clone(),
            }

            p { class: "restaurant-description", "{restaurant.description_label()}" }

            ul {
                class: "restaurant-facts",
                li {
                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                    " {restaurant.location_label()}"
                }
                li {
                    Icon { icon: FaPhone, width: 14, height: 14 }
                    " {restaurant.phone_label()}"
                }
                li {
                    Icon { icon: FaUtensils, width: 14, height: 14 }
                    " {restaurant.cuisine_label()} · {restaurant.price_range_label()}"
                }
            }

            section {
                class: "restaurant-hours",
                h2 {
                    Icon { icon: FaClock, width: 16, height: 16 }
                    " Opening hours"
                }
                if restaurant.operating_hours.is_empty() {
                    p { class: "muted", "Hours not listed." }
                } else {
                    table {
                        for row in restaurant.operating_hours.iter() {
                            tr {
                                key: "{row.day}",
                                th { "{row.day}" }
                                td { "{row.hours}" }
                            }
                        }
                    }
                }
            }

            section {
                class: "restaurant-offers",
                h2 {
                    Icon { icon: FaTag, width: 16, height: 16 }
                    " Special offers"
                }
                p {
                    "Early Bird: "
                    if restaurant.has_early_bird { "Available" } else { "Not Available" }
                }
                p {
                    "Last Minute: "
                    if restaurant.has_last_minute { "Available" } else { "Not Available" }
                }
                OfferList { restaurant_id: id }
            }
        }
    }
}

/// Offers published for one restaurant.
#[component]
fn OfferList(restaurant_id: u64) -> Element {
    let backend = use_backend();
    let offers = use_resource(use_reactive!(|(restaurant_id,)| {
        let backend = backend.clone();
        async move { backend.list_offers(restaurant_id).await }
    }));

    let list: Vec<Offer> = match offers.cloned() {
        None => return rsx! { Spinner {} },
        Some(Err(e)) => return rsx! { ErrorBanner { message: e.to_string() } },
        Some(Ok(list)) => list,
    };

    if list.is_empty() {
        return rsx! {
            p { class: "muted", "No offers running right now." }
        };
    }

    rsx! {
        ul {
            class: "offer-list",
            for offer in list {
                li {
                    key: "{offer.id}",
                    class: "offer",
                    span { class: "tag", "{offer.kind.label()}" }
                    " {offer.title}"
                    if let Some(percent) = offer.discount_percent {
                        " ({percent}% off)"
                    }
                    if let Some(description) = offer.description.clone() {
                        p { class: "muted", "{description}" }
                    }
                }
            }
        }
    }
}
