use dioxus::prelude::*;

use crate::icons::FaXmark;
use crate::Icon;

/// Full-screen image viewer. Closes on a background click, the close button or Escape.
#[component]
pub fn Lightbox(src: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "lightbox",
            tabindex: "0",
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },
            onclick: move |_| on_close.call(()),
            button {
                class: "lightbox-close",
                aria_label: "Close",
                onclick: move |evt: MouseEvent| {
                    evt.stop_propagation();
                    on_close.call(());
                },
                Icon { width: 24, height: 24, icon: FaXmark }
            }
            img {
                src: "{src}",
                alt: "Full size view",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
            }
        }
    }
}
