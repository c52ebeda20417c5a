use dioxus::prelude::*;
use store::nav::NAV_ITEMS;
use store::Section;

#[component]
pub fn Navbar(active: Section, on_navigate: EventHandler<Section>) -> Element {
    rsx! {
        nav {
            class: "site-nav",
            for section in NAV_ITEMS {
                button {
                    key: "{section.id()}",
                    class: if section == active { "nav-item active" } else { "nav-item" },
                    onclick: move |_| on_navigate.call(section),
                    "{section.label()}"
                }
            }
        }
    }
}
