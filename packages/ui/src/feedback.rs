//! Loading and result banners shared by every page.

use dioxus::prelude::*;

/// Inline error message. Pages show every failed call this way.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "banner banner--error",
            role: "alert",
            "{message}"
        }
    }
}

#[component]
pub fn SuccessBanner(message: String) -> Element {
    rsx! {
        div {
            class: "banner banner--success",
            "{message}"
        }
    }
}

#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}
