pub mod admin;
pub mod config;
pub mod models;
pub mod nav;
pub mod repo;
pub mod roster;
pub mod validate;

mod memory;
pub use memory::MemoryStore;

pub use admin::AdminEntry;
pub use config::{EmptyGroups, RosterConfig, SiteConfig, SiteInfo};
pub use models::{
    Department, Event, EventDraft, EventStatus, GalleryImage, ImageUpload, Member, MemberDraft,
    MemberRecord, NewGalleryImage, UserInfo,
};
pub use nav::{Access, Navigation, Section, Transition};
pub use repo::{ContentStore, StoreError};
pub use roster::{DepartmentGroup, KeywordOrder, OrderingRules, Rank, Roster};
pub use validate::ValidationError;
