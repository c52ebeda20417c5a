use dioxus::prelude::*;

use crate::use_site_data;

#[component]
pub fn GallerySection(on_image: EventHandler<String>) -> Element {
    let data = use_site_data();
    let images = data.gallery.read().clone();

    rsx! {
        section {
            id: "gallery",
            class: "section",
            h2 { "Gallery" }
            p { class: "section-subtitle", "Memorable Moments & Activities" }
            div {
                class: "gallery-grid",
                for image in images {
                    div {
                        key: "{image.id}",
                        class: "gallery-item",
                        onclick: {
                            let url = image.url.clone();
                            move |_| on_image.call(url.clone())
                        },
                        img { src: "{image.url}", alt: "{image.alt}" }
                    }
                }
            }
        }
    }
}
