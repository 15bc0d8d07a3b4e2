use api::{Restaurant, RestaurantId};
use dioxus::prelude::*;

use crate::icons::{FaLocationDot, FaUtensils};
use crate::Icon;

/// Summary tile for the restaurant list.
#[component]
pub fn RestaurantCard(restaurant: Restaurant, on_select: EventHandler<RestaurantId>) -> Element {
    let id = restaurant.id;

    rsx! {
        div {
            class: "restaurant-card",
            onclick: move |_| on_select.call(id),

            if let Some(src) = restaurant.thumbnail() {
                img {
                    class: "restaurant-card-image",
                    src: "{src}",
                    alt: "{restaurant.name}",
                }
            } else {
                div { class: "restaurant-card-image restaurant-card-image--empty" }
            }

            div {
                class: "restaurant-card-body",
                h3 { "{restaurant.name}" }
                p {
                    class: "restaurant-card-meta",
                    Icon { icon: FaUtensils, width: 12, height: 12 }
                    " {restaurant.cuisine_label()} · {restaurant.price_range_label()}"
                }
                p {
                    class: "restaurant-card-meta",
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    " {restaurant.location_label()}"
                }
                div {
                    class: "restaurant-card-tags",
                    if restaurant.has_early_bird {
                        span { class: "tag", "Early Bird" }
                    }
                    if restaurant.has_last_minute {
                        span { class: "tag", "Last Minute" }
                    }
                }
            }
        }
    }
}
