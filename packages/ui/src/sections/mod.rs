//! One component per page section. The page shell shows exactly one at a time.

mod home;
pub use home::HomeSection;

mod team;
pub use team::TeamSection;

mod events;
pub use events::EventsSection;

mod gallery;
pub use gallery::GallerySection;

mod contact;
pub use contact::ContactSection;

mod auth;
pub use auth::AuthSection;

pub mod admin;
pub use admin::AdminSection;
