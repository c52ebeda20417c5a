//! # Admin panel
//!
//! Only reachable with admin access; the page shell redirects everyone else to
//! the sign-in section before this renders. Each tab edits one resource through
//! the [`SiteData`](crate::SiteData) mutation methods, so the public sections
//! pick up changes without a reload.

use dioxus::prelude::*;

use crate::icons::{FaCalendarDays, FaHouse, FaImages, FaRightFromBracket, FaUserShield, FaUsers};
use crate::site_data::server_message;
use crate::{notify, use_auth, use_notifications, AuthState, Icon, NoticeLevel};

mod admins_tab;
mod events_tab;
mod gallery_tab;
mod home_tab;
mod team_tab;

use admins_tab::AdminsTab;
use events_tab::EventsTab;
use gallery_tab::GalleryTab;
use home_tab::HomeTab;
use team_tab::TeamTab;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Home,
    Events,
    Gallery,
    Team,
    Admins,
}

impl AdminTab {
    pub const ALL: [AdminTab; 5] = [
        AdminTab::Home,
        AdminTab::Events,
        AdminTab::Gallery,
        AdminTab::Team,
        AdminTab::Admins,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Home => "Edit Home",
            AdminTab::Events => "Manage Events",
            AdminTab::Gallery => "Manage Gallery",
            AdminTab::Team => "Manage Team",
            AdminTab::Admins => "Manage Admins",
        }
    }
}

#[component]
pub fn AdminSection(on_logout: EventHandler<()>) -> Element {
    let mut tab = use_signal(AdminTab::default);
    let mut auth = use_auth();
    let mut notifications = use_notifications();

    let logout = move |_: MouseEvent| {
        spawn(async move {
            match api::logout().await {
                Ok(()) => {
                    auth.set(AuthState::signed_out());
                    notify(&mut notifications, NoticeLevel::Success, "Logged out successfully");
                    on_logout.call(());
                }
                Err(e) => {
                    let message = format!("Failed to log out: {}", server_message(&e));
                    notify(&mut notifications, NoticeLevel::Error, &message);
                }
            }
        });
    };

    rsx! {
        section {
            id: "admin",
            class: "section admin-section",
            h2 { "Admin Panel" }
            div {
                class: "admin-layout",
                aside {
                    class: "admin-sidebar",
                    for item in AdminTab::ALL {
                        button {
                            key: "{item.label()}",
                            class: if item == tab() { "admin-tab active" } else { "admin-tab" },
                            onclick: move |_| tab.set(item),
                            match item {
                                AdminTab::Home => rsx! { Icon { width: 14, height: 14, icon: FaHouse } },
                                AdminTab::Events => rsx! { Icon { width: 14, height: 14, icon: FaCalendarDays } },
                                AdminTab::Gallery => rsx! { Icon { width: 14, height: 14, icon: FaImages } },
                                AdminTab::Team => rsx! { Icon { width: 14, height: 14, icon: FaUsers } },
                                AdminTab::Admins => rsx! { Icon { width: 14, height: 14, icon: FaUserShield } },
                            }
                            " {item.label()}"
                        }
                    }
                    button {
                        class: "admin-tab logout",
                        onclick: logout,
                        Icon { width: 14, height: 14, icon: FaRightFromBracket }
                        " Logout"
                    }
                }
                div {
                    class: "admin-content",
                    match tab() {
                        AdminTab::Home => rsx! { HomeTab {} },
                        AdminTab::Events => rsx! { EventsTab {} },
                        AdminTab::Gallery => rsx! { GalleryTab {} },
                        AdminTab::Team => rsx! { TeamTab {} },
                        AdminTab::Admins => rsx! { AdminsTab {} },
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
    fn test_tab_labels_are_distinct() {
        let mut labels: Vec<_> = AdminTab::ALL.iter().map(AdminTab::label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), AdminTab::ALL.len());
        assert_eq!(AdminTab::default(), AdminTab::Home);
    }
}
