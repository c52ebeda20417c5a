use dioxus::prelude::*;

use crate::icons::{FaEnvelope, FaInstagram, FaLinkedin};
use crate::{use_site_data, Icon};

#[component]
pub fn ContactSection() -> Element {
    let data = use_site_data();
    let email = data.config.read().site.contact_email.clone();

    rsx! {
        section {
            id: "contact",
            class: "section",
            h2 { "Contact" }
            p {
                class: "contact-email",
                Icon { width: 16, height: 16, icon: FaEnvelope }
                " "
                a { href: "mailto:{email}", "{email}" }
            }
            p {
                class: "contact-social",
                Icon { width: 18, height: 18, icon: FaInstagram }
                Icon { width: 18, height: 18, icon: FaLinkedin }
                " Follow us on social media for updates!"
            }
        }
    }
}
