//! Transient notifications ("toasts") for remote call results.

use std::time::Duration;

use dioxus::prelude::*;

use crate::time::sleep;

const DISMISS_AFTER: Duration = Duration::from_secs(4);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct Notifications {
    pub entries: Vec<Notice>,
    next_id: u64,
}

impl Notifications {
    fn push(&mut self, level: NoticeLevel, message: &str) -> u64 {
        self.next_id += 1;
        self.entries.push(Notice {
            id: self.next_id,
            level,
            message: message.to_string(),
        });
        self.next_id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|n| n.id != id);
    }
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Show a notification and remove it again after a few seconds.
pub fn notify(notifications: &mut Signal<Notifications>, level: NoticeLevel, message: &str) {
    match level {
        NoticeLevel::Success => tracing::info!("{}", message),
        NoticeLevel::Error => tracing::warn!("{}", message),
    }
    let id = notifications.write().push(level, message);
    let mut notifications = *notifications;
    spawn(async move {
        sleep(DISMISS_AFTER).await;
        notifications.write().dismiss(id);
    });
}

/// Renders the notification stack. Must sit below the `Signal<Notifications>` provider.
#[component]
pub fn NotificationStack() -> Element {
    let mut notifications = use_notifications();
    let entries = notifications.read().entries.clone();

    rsx! {
        div {
            class: "toast-stack",
            for notice in entries {
                div {
                    key: "{notice.id}",
                    class: match notice.level {
                        NoticeLevel::Success => "toast toast-success",
                        NoticeLevel::Error => "toast toast-error",
                    },
                    role: "status",
                    span { "{notice.message}" }
                    button {
                        class: "toast-close",
                        aria_label: "Dismiss",
                        onclick: move |_| notifications.write().dismiss(notice.id),
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_dismiss() {
        let mut n = Notifications::default();
        let a = n.push(NoticeLevel::Success, "Saved");
        let b = n.push(NoticeLevel::Error, "Failed");
        assert_ne!(a, b);
        n.dismiss(a);
        assert_eq!(n.entries.len(), 1);
        assert_eq!(n.entries[0].message, "Failed");
    }
}
