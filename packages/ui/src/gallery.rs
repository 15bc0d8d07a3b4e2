use dioxus::prelude::*;

use crate::views::ModalOverlay;

/// Thumbnail grid; clicking an image opens it full size in a modal.
#[component]
pub fn ImageGallery(images: Vec<String>, alt: String) -> Element {
    let mut selected = use_signal(|| Option::<String>::None);

    if images.is_empty() {
        return rsx! {
            p { class: "muted", "No photos yet." }
        };
    }

    rsx! {
        div {
            class: "gallery",
            for (index, image) in images.iter().enumerate() {
                div {
                    key: "{index}",
                    class: "gallery-item",
                    onclick: {
                        let image = image.clone();
                        move |_| selected.set(Some(image.clone()))
                    },
                    img {
                        src: "{image}",
                        alt: "{alt} image {index + 1}",
                    }
                }
            }
        }

        if let Some(image) = selected() {
            ModalOverlay {
                on_close: move |_| selected.set(None),
                img {
                    class: "gallery-full",
                    src: "{image}",
                    alt: "{alt}",
                }
            }
        }
    }
}
