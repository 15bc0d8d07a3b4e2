use dioxus::prelude::*;

/// Top bar with the brand on the left and whatever links the app passes in.
#[component]
pub fn Navbar(brand: Element, children: Element) -> Element {
    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-brand",
                {brand}
            }
            div {
                class: "navbar-links",
                {children}
            }
        }
    }
}
