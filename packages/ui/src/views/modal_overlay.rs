use dioxus::prelude::*;

/// A full-screen overlay with its children centered in a card.
/// Clicking outside the card or on the close button triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                button {
                    class: "modal-close",
                    title: "Close",
                    onclick: move |_| on_close.call(()),
                    "X"
                }
                {children}
            }
        }
    }
}
