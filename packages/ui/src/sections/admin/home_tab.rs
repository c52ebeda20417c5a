use dioxus::prelude::*;

use crate::components::{Button, Field};
use crate::use_site_data;

#[component]
pub(super) fn HomeTab() -> Element {
    let data = use_site_data();
    let mut text = use_signal(|| data.about_text());
    let mut saving = use_signal(|| false);

    rsx! {
        div {
            class: "admin-panel",
            h3 { "Edit Homepage" }
            Field {
                label: "About Us Description",
                html_for: "about-text",
                textarea {
                    id: "about-text",
                    rows: "6",
                    value: "{text}",
                    oninput: move |evt| text.set(evt.value()),
                }
            }
            Button {
                disabled: saving(),
                onclick: move |_| {
                    saving.set(true);
                    spawn(async move {
                        data.save_about(text()).await;
                        saving.set(false);
                    });
                },
                if saving() { "Saving..." } else { "Save Changes" }
            }
        }
    }
}
