//! # Site data: the client-side content cache
//!
//! [`SiteData`] holds one signal per resource and is provided through context
//! by [`SiteDataProvider`]. Components read the signals directly; every change
//! goes through one of the mutation methods, which call the matching server
//! function, update the cache on success and raise a notification either way.
//! A failed call leaves the cache untouched.
//!
//! `loading` stays `true` until the first fetch of every resource finished;
//! the page shell renders no section content while it is set.

use api::SiteConfig;
use dioxus::prelude::*;
use store::{
    Department, Event, EventDraft, GalleryImage, ImageUpload, Member, MemberDraft,
};

use crate::notify::{notify, NoticeLevel, Notifications};

#[derive(Clone, Copy, PartialEq)]
pub struct SiteData {
    pub loading: Signal<bool>,
    pub config: Signal<SiteConfig>,
    pub about: Signal<Option<String>>,
    pub departments: Signal<Vec<Department>>,
    pub members: Signal<Vec<Member>>,
    pub events: Signal<Vec<Event>>,
    pub gallery: Signal<Vec<GalleryImage>>,
    notifications: Signal<Notifications>,
}

pub fn use_site_data() -> SiteData {
    use_context::<SiteData>()
}

/// Loads every resource once and provides [`SiteData`] and the notification stack.
#[component]
pub fn SiteDataProvider(children: Element) -> Element {
    let notifications = use_context_provider(|| Signal::new(Notifications::default()));
    let data = use_context_provider(|| SiteData {
        loading: Signal::new(true),
        config: Signal::new(SiteConfig::default()),
        about: Signal::new(None),
        departments: Signal::new(Vec::new()),
        members: Signal::new(Vec::new()),
        events: Signal::new(Vec::new()),
        gallery: Signal::new(Vec::new()),
        notifications,
    });

    let _ = use_resource(move || async move {
        data.refresh().await;
    });

    rsx! {
        {children}
    }
}

impl SiteData {
    /// The about text, or the configured default until one is saved.
    pub fn about_text(&self) -> String {
        match self.about.read().as_deref() {
            Some(text) if !text.trim().is_empty() => text.to_string(),
            _ => self.config.read().site.default_about.clone(),
        }
    }

    /// Department names in stored order.
    pub fn department_names(&self) -> Vec<String> {
        self.departments.read().iter().map(|d| d.name.clone()).collect()
    }

    /// Reload everything from the server.
    pub async fn refresh(mut self) {
        self.loading.set(true);

        match api::get_site_config().await {
            Ok(config) => self.config.set(config),
            Err(e) => tracing::warn!("Using default site configuration: {}", e),
        }
        match api::get_about_text().await {
            Ok(about) => self.about.set(about),
            Err(e) => self.fail("Failed to load about text", e),
        }
        self.reload_team().await;
        self.reload_events().await;
        match api::list_gallery().await {
            Ok(gallery) => self.gallery.set(gallery),
            Err(e) => self.fail("Failed to load gallery", e),
        }

        self.loading.set(false);
    }

    async fn reload_team(mut self) {
        match api::list_departments().await {
            Ok(departments) => self.departments.set(departments),
            Err(e) => self.fail("Failed to load departments", e),
        }
        match api::list_members().await {
            Ok(members) => self.members.set(members),
            Err(e) => self.fail("Failed to load team members", e),
        }
    }

    async fn reload_events(mut self) {
        match api::list_events().await {
            Ok(events) => self.events.set(events),
            Err(e) => self.fail("Failed to load events", e),
        }
    }

    fn ok(mut self, message: &str) {
        notify(&mut self.notifications, NoticeLevel::Success, message);
    }

    fn fail(mut self, context: &str, error: ServerFnError) {
        let message = format!("{context}: {}", server_message(&error));
        notify(&mut self.notifications, NoticeLevel::Error, &message);
    }

    /// Raise an error notification for a problem found before any call was made.
    pub fn reject(mut self, message: &str) {
        notify(&mut self.notifications, NoticeLevel::Error, message);
    }

    // -- About --------------------------------------------------------------

    pub async fn save_about(mut self, text: String) -> bool {
        match api::save_about_text(text.clone()).await {
            Ok(()) => {
                self.about.set(Some(text.trim().to_string()));
                self.ok("Home content updated");
                true
            }
            Err(e) => {
                self.fail("Failed to save", e);
                false
            }
        }
    }

    // -- Departments --------------------------------------------------------

    pub async fn add_department(mut self, name: String) -> bool {
        match api::add_department(name).await {
            Ok(department) => {
                self.departments.write().push(department);
                self.ok("Department added");
                true
            }
            Err(e) => {
                self.fail("Failed to add department", e);
                false
            }
        }
    }

    pub async fn delete_department(self, id: String) -> bool {
        match api::delete_department(id).await {
            Ok(()) => {
                // Members of the deleted department now resolve to "Unknown".
                self.reload_team().await;
                self.ok("Department deleted");
                true
            }
            Err(e) => {
                self.fail("Failed to delete department", e);
                false
            }
        }
    }

    // -- Members ------------------------------------------------------------

    pub async fn save_member(
        mut self,
        id: Option<String>,
        draft: MemberDraft,
        photo: Option<ImageUpload>,
    ) -> bool {
        let editing = id.is_some();
        match api::save_member(id, draft, photo).await {
            Ok(member) => {
                let mut members = self.members.write();
                match members.iter_mut().find(|m| m.id == member.id) {
                    Some(existing) => *existing = member,
                    None => members.push(member),
                }
                drop(members);
                self.ok(if editing { "Member updated" } else { "Member added" });
                true
            }
            Err(e) => {
                self.fail("Failed to save member", e);
                false
            }
        }
    }

    pub async fn delete_member(mut self, id: String) -> bool {
        match api::delete_member(id.clone()).await {
            Ok(()) => {
                self.members.write().retain(|m| m.id != id);
                self.ok("Member deleted");
                true
            }
            Err(e) => {
                self.fail("Failed to delete member", e);
                false
            }
        }
    }

    // -- Events -------------------------------------------------------------

    pub async fn save_event(
        self,
        id: Option<String>,
        draft: EventDraft,
        hero: Option<ImageUpload>,
        gallery: Vec<ImageUpload>,
    ) -> bool {
        let editing = id.is_some();
        match api::save_event(id, draft, hero, gallery).await {
            Ok(_) => {
                self.reload_events().await;
                self.ok(if editing { "Event updated" } else { "Event added" });
                true
            }
            Err(e) => {
                self.fail("Failed to save event", e);
                false
            }
        }
    }

    pub async fn delete_event(mut self, id: String) -> bool {
        match api::delete_event(id.clone()).await {
            Ok(()) => {
                self.events.write().retain(|e| e.id != id);
                self.ok("Event deleted");
                true
            }
            Err(e) => {
                self.fail("Failed to delete event", e);
                false
            }
        }
    }

    // -- Gallery ------------------------------------------------------------

    pub async fn add_gallery_image(mut self, image: ImageUpload, alt: Option<String>) -> bool {
        match api::add_gallery_image(image, alt).await {
            Ok(stored) => {
                self.gallery.write().push(stored);
                self.ok("Image uploaded");
                true
            }
            Err(e) => {
                self.fail("Failed to upload image", e);
                false
            }
        }
    }

    pub async fn delete_gallery_image(mut self, id: String) -> bool {
        match api::delete_gallery_image(id.clone()).await {
            Ok(()) => {
                self.gallery.write().retain(|g| g.id != id);
                self.ok("Image deleted");
                true
            }
            Err(e) => {
                self.fail("Failed to delete image", e);
                false
            }
        }
    }
}

/// The human-readable part of a server function error.
pub fn server_message(error: &ServerFnError) -> String {
    match error {
        ServerFnError::ServerError { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
