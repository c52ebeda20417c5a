use dioxus::prelude::*;

use crate::use_site_data;

#[component]
pub fn HomeSection() -> Element {
    let data = use_site_data();
    let about = data.about_text();

    rsx! {
        section {
            id: "home",
            class: "section",
            h2 { "About Us" }
            p { class: "about-text", "{about}" }
        }
    }
}
