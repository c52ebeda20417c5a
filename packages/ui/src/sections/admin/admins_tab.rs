use dioxus::prelude::*;
use store::admin::check_revoke;
use store::validate::normalize_email;
use store::AdminEntry;

use crate::components::{Button, ConfirmDialog};
use crate::site_data::server_message;
use crate::{notify, use_auth, use_notifications, NoticeLevel};

/// Grant and revoke the admin role by account email.
#[component]
pub(super) fn AdminsTab() -> Element {
    let auth = use_auth();
    let mut notifications = use_notifications();
    let mut admins = use_signal(Vec::<AdminEntry>::new);
    let mut email = use_signal(String::new);
    let mut pending_revoke = use_signal(|| None::<AdminEntry>);

    let _ = use_resource(move || async move {
        match api::list_admins().await {
            Ok(list) => admins.set(list),
            Err(e) => {
                let message = format!("Failed to load admins: {}", server_message(&e));
                notify(&mut notifications, NoticeLevel::Error, &message);
            }
        }
    });

    let grant = move |_: MouseEvent| {
        let target = normalize_email(&email());
        if target.is_empty() {
            notify(&mut notifications, NoticeLevel::Error, "Email required");
            return;
        }
        spawn(async move {
            match api::grant_admin(target).await {
                Ok(entry) => {
                    admins.write().push(entry);
                    email.set(String::new());
                    notify(&mut notifications, NoticeLevel::Success, "Admin access granted");
                }
                Err(e) => {
                    let message = format!("Failed to grant access: {}", server_message(&e));
                    notify(&mut notifications, NoticeLevel::Error, &message);
                }
            }
        });
    };

    let mut revoke = move |entry: AdminEntry| {
        let current = auth().user.map(|u| u.id).unwrap_or_default();
        if let Err(e) = check_revoke(&current, &entry.user_id) {
            notify(&mut notifications, NoticeLevel::Error, &e.to_string());
            return;
        }
        spawn(async move {
            match api::revoke_admin(entry.user_id.clone()).await {
                Ok(()) => {
                    admins.write().retain(|a| a.user_id != entry.user_id);
                    notify(&mut notifications, NoticeLevel::Success, "Admin access revoked");
                }
                Err(e) => {
                    let message = format!("Failed to revoke access: {}", server_message(&e));
                    notify(&mut notifications, NoticeLevel::Error, &message);
                }
            }
        });
    };

    let current_id = auth().user.map(|u| u.id);
    let list = admins.read().clone();

    rsx! {
        div {
            class: "admin-panel",
            h3 { "Manage Admins" }
            p { class: "admin-hint", "The account must already exist. Ask the person to sign up first." }
            div {
                class: "inline-form",
                input {
                    r#type: "email",
                    placeholder: "user@example.com",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                Button { onclick: grant, "Grant Admin" }
            }
            table {
                class: "admin-table",
                thead {
                    tr {
                        th { "Email" }
                        th { "Since" }
                        th {}
                    }
                }
                tbody {
                    for entry in list {
                        tr {
                            key: "{entry.user_id}",
                            td { "{entry.email}" }
                            td { "{entry.granted_at}" }
                            td {
                                class: "row-actions",
                                if current_id.as_deref() == Some(entry.user_id.as_str()) {
                                    span { class: "admin-list-meta", "You" }
                                } else {
                                    button {
                                        class: "btn btn-ghost",
                                        onclick: {
                                            let entry = entry.clone();
                                            move |_| pending_revoke.set(Some(entry.clone()))
                                        },
                                        "Revoke"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if let Some(entry) = pending_revoke() {
                ConfirmDialog {
                    message: format!("Revoke admin access for {}?", entry.email),
                    confirm_label: "Revoke",
                    on_cancel: move |_| pending_revoke.set(None),
                    on_confirm: {
                        let entry = entry.clone();
                        move |_| {
                            pending_revoke.set(None);
                            revoke(entry.clone());
                        }
                    },
                }
            }
        }
    }
}
