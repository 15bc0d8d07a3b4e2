use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("No route for /{}", path);

    rsx! {
        div {
            class: "not-found",
            h1 { "404 - Page Not Found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Go to the restaurant list" }
        }
    }
}
