use dioxus::prelude::*;
use store::Access;

use crate::{use_auth, use_site_data};

/// Site title bar. The account button opens the sign-in section, or the admin
/// panel for admins.
#[component]
pub fn Header(on_account: EventHandler<()>) -> Element {
    let data = use_site_data();
    let auth = use_auth();
    let site = data.config.read().site.clone();

    let account_label = match auth().access() {
        Access::Anonymous => "Login",
        Access::Member => "Account",
        Access::Admin => "Admin",
    };

    rsx! {
        header {
            class: "site-header",
            div {
                class: "site-logo",
                {site.name.chars().next().map(String::from).unwrap_or_default()}
            }
            div {
                class: "site-title",
                h1 { "{site.name}" }
                p { "{site.tagline}" }
            }
            if !auth().loading {
                button {
                    class: "account-button",
                    onclick: move |_| on_account.call(()),
                    "{account_label}"
                }
            }
        }
    }
}
