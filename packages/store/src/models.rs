//! # Domain models for the committee site
//!
//! These types cross the server/client boundary through Dioxus server functions,
//! so all of them are `Serialize + Deserialize`, and `PartialEq` so they can be
//! used directly as component props.
//!
//! ## Stored vs. displayed members
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`MemberRecord`] | A row as the content store keeps it: department by id (nullable), optional image URL, sort position. |
//! | [`Member`] | What the site renders: department resolved to its name (or [`UNKNOWN_DEPARTMENT`]) and an image URL that is never empty. |
//!
//! [`resolve_members`] performs the projection. Deleting a department never
//! touches member rows, so a member may point at a department id that no longer
//! exists; it then shows up under [`UNKNOWN_DEPARTMENT`].
//!
//! ## Drafts
//!
//! [`MemberDraft`] and [`EventDraft`] are the admin form payloads. They are
//! validated by [`crate::validate`] on both sides of the wire.

use serde::{Deserialize, Serialize};

/// Department name shown for members whose department is missing or deleted.
pub const UNKNOWN_DEPARTMENT: &str = "Unknown";

/// Alt text used when a gallery image is uploaded without one.
pub const DEFAULT_ALT_TEXT: &str = "Gallery image";

/// A department as stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
    pub sort_order: i32,
}

/// A team member row as stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: String,
    pub name: String,
    pub role: String,
    pub department_id: Option<String>,
    pub image_url: Option<String>,
    pub sort_order: i32,
}

/// A team member ready for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Department name, or [`UNKNOWN_DEPARTMENT`].
    pub dept: String,
    /// Department id as stored, kept so the admin form can preselect it.
    pub department_id: Option<String>,
    pub img: String,
}

impl Member {
    pub fn resolve(record: &MemberRecord, departments: &[Department]) -> Self {
        let dept = record
            .department_id
            .as_deref()
            .and_then(|id| departments.iter().find(|d| d.id == id))
            .map(|d| d.name.clone())
            .unwrap_or_else(|| UNKNOWN_DEPARTMENT.to_string());

        let img = match record.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => placeholder_avatar(&record.name),
        };

        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            role: record.role.clone(),
            dept,
            department_id: record.department_id.clone(),
            img,
        }
    }
}

/// Resolve stored member rows against the department list, keeping row order.
pub fn resolve_members(records: &[MemberRecord], departments: &[Department]) -> Vec<Member> {
    records
        .iter()
        .map(|r| Member::resolve(r, departments))
        .collect()
}

/// Placeholder avatar URL carrying the first letter of the name.
pub fn placeholder_avatar(name: &str) -> String {
    let initial = name.trim().chars().next().map(String::from).unwrap_or_default();
    format!("https://placehold.co/115x115?text={initial}")
}

/// Whether an event already happened or is still ahead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Past,
    #[default]
    Upcoming,
}

impl EventStatus {
    /// Parse a stored status. Anything other than `"past"` counts as upcoming.
    pub fn from_stored(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("past") {
            EventStatus::Past
        } else {
            EventStatus::Upcoming
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Past => "past",
            EventStatus::Upcoming => "upcoming",
        }
    }

    /// Badge label shown on event cards.
    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Past => "Completed",
            EventStatus::Upcoming => "Upcoming",
        }
    }
}

/// A committee event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Free-form date text, e.g. "17 September 2025".
    pub date: String,
    /// Short description shown on the card.
    pub description: Option<String>,
    /// Long description shown on the detail view.
    pub full_description: Option<String>,
    pub hero_image: Option<String>,
    pub gallery: Vec<String>,
    pub status: EventStatus,
}

impl Event {
    /// Card text.
    pub fn short_desc(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Detail text: the full description, falling back to the short one.
    pub fn body(&self) -> &str {
        self.full_description
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.description.as_deref())
            .unwrap_or("")
    }

    pub fn is_past(&self) -> bool {
        self.status == EventStatus::Past
    }
}

/// Split events into (past, upcoming), preserving order within each.
pub fn partition_events(events: &[Event]) -> (Vec<Event>, Vec<Event>) {
    events.iter().cloned().partition(Event::is_past)
}

/// An image in the public gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub url: String,
    pub alt: String,
    pub sort_order: i32,
}

/// Gallery insert payload once the file has been stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGalleryImage {
    pub url: String,
    pub alt: Option<String>,
}

/// Admin form payload for creating or editing a member.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
    pub role: String,
    pub department_id: Option<String>,
    /// New image URL. `None` keeps the current image on update.
    pub image_url: Option<String>,
}

/// Admin form payload for creating or editing an event.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub description: String,
    pub full_description: String,
    pub status: EventStatus,
    /// New hero image URL. `None` keeps the current hero on update.
    pub hero_image: Option<String>,
    /// Complete gallery list to store (existing URLs followed by new uploads).
    pub gallery: Vec<String>,
}

/// A file picked in the browser, sent to the server for storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// The signed-in account as the client sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
}

impl UserInfo {
    /// Uppercase first letter of the email, for the account avatar.
    pub fn initial(&self) -> String {
        self.email
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dept(id: &str, name: &str) -> Department {
        Department {
            id: id.to_string(),
            name: name.to_string(),
            sort_order: 0,
        }
    }

    fn record(id: &str, name: &str, dept: Option<&str>, img: Option<&str>) -> MemberRecord {
        MemberRecord {
            id: id.to_string(),
            name: name.to_string(),
            role: "Head".to_string(),
            department_id: dept.map(str::to_string),
            image_url: img.map(str::to_string),
            sort_order: 0,
        }
    }

    #[test]
    fn test_resolve_department_name() {
        let depts = vec![dept("d1", "Sports Department")];
        let m = Member::resolve(&record("m1", "Asha", Some("d1"), None), &depts);
        assert_eq!(m.dept, "Sports Department");
        assert_eq!(m.department_id.as_deref(), Some("d1"));
    }

    #[test]
    fn test_resolve_missing_or_dangling_department() {
        let depts = vec![dept("d1", "Media")];
        let none = Member::resolve(&record("m1", "Asha", None, None), &depts);
        let gone = Member::resolve(&record("m2", "Ravi", Some("deleted"), None), &depts);
        assert_eq!(none.dept, UNKNOWN_DEPARTMENT);
        assert_eq!(gone.dept, UNKNOWN_DEPARTMENT);
    }

    #[test]
    fn test_placeholder_image() {
        let m = Member::resolve(&record("m1", "Asha", None, Some("  ")), &[]);
        assert_eq!(m.img, "https://placehold.co/115x115?text=A");

        let m = Member::resolve(&record("m1", "Asha", None, Some("/uploads/a.png")), &[]);
        assert_eq!(m.img, "/uploads/a.png");
    }

    #[test]
    fn test_event_status_from_stored() {
        assert_eq!(EventStatus::from_stored("past"), EventStatus::Past);
        assert_eq!(EventStatus::from_stored("PAST"), EventStatus::Past);
        assert_eq!(EventStatus::from_stored("upcoming"), EventStatus::Upcoming);
        assert_eq!(EventStatus::from_stored("cancelled"), EventStatus::Upcoming);
    }

    #[test]
    fn test_event_body_fallback() {
        let mut event = Event {
            id: "e1".into(),
            title: "Cricket Cup".into(),
            date: "November 10, 2024".into(),
            description: Some("Runner-up".into()),
            full_description: None,
            hero_image: None,
            gallery: vec![],
            status: EventStatus::Past,
        };
        assert_eq!(event.body(), "Runner-up");

        event.full_description = Some("Full story".into());
        assert_eq!(event.body(), "Full story");

        event.full_description = None;
        event.description = None;
        assert_eq!(event.body(), "");
        assert_eq!(event.short_desc(), "");
    }

    #[test]
    fn test_partition_events() {
        let make = |id: &str, status| Event {
            id: id.into(),
            title: id.into(),
            date: String::new(),
            description: None,
            full_description: None,
            hero_image: None,
            gallery: vec![],
            status,
        };
        let events = vec![
            make("a", EventStatus::Upcoming),
            make("b", EventStatus::Past),
            make("c", EventStatus::Past),
        ];
        let (past, upcoming) = partition_events(&events);
        assert_eq!(past.iter().map(|e| e.id.as_str()).collect::<Vec<_>>(), ["b", "c"]);
        assert_eq!(upcoming.len(), 1);
    }

    #[test]
    fn test_user_initial() {
        let user = UserInfo {
            id: "u".into(),
            email: "sara@example.com".into(),
            is_admin: false,
        };
        assert_eq!(user.initial(), "S");
    }
}
