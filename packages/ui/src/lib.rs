//! This crate contains all shared UI for the committee site.

use dioxus::prelude::*;

pub mod components;
pub mod sections;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaInstagram, FaLinkedin};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const SITE_CSS: Asset = asset!("/assets/site.css");

mod auth;
pub use auth::{use_auth, AuthProvider, AuthState};

pub mod notify;
pub use notify::{notify, use_notifications, NoticeLevel, NotificationStack, Notifications};

mod site_data;
pub use site_data::{use_site_data, SiteData, SiteDataProvider};

mod scroll;
pub use scroll::scroll_to_top;

mod time;
