use dioxus::prelude::*;

use crate::use_site_data;

#[component]
pub fn Footer(show_admin_link: bool, on_admin: EventHandler<()>) -> Element {
    let data = use_site_data();
    let footer = data.config.read().site.footer.clone();

    rsx! {
        footer {
            class: "site-footer",
            p {
                "{footer}"
                if show_admin_link {
                    button {
                        class: "footer-admin-link",
                        onclick: move |_| on_admin.call(()),
                        "Admin Panel"
                    }
                }
            }
        }
    }
}
