use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::{
    Department, Event, EventDraft, GalleryImage, MemberDraft, MemberRecord, NewGalleryImage,
    DEFAULT_ALT_TEXT,
};
use crate::repo::{non_empty, ContentStore, StoreError};

/// In-memory ContentStore for tests and local development without a database.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    about: Option<String>,
    departments: Vec<Department>,
    members: Vec<MemberRecord>,
    /// Insertion order; listed newest first.
    events: Vec<Event>,
    gallery: Vec<GalleryImage>,
}

impl Inner {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Backend("memory store poisoned".into()))
    }
}

fn event_from_draft(id: String, draft: &EventDraft, hero_image: Option<String>) -> Event {
    Event {
        id,
        title: draft.title.trim().to_string(),
        date: draft.date.trim().to_string(),
        description: non_empty(&draft.description),
        full_description: non_empty(&draft.full_description),
        hero_image,
        gallery: draft.gallery.clone(),
        status: draft.status,
    }
}

impl ContentStore for MemoryStore {
    async fn get_about_text(&self) -> Result<Option<String>, StoreError> {
        Ok(self.lock()?.about.clone())
    }

    async fn set_about_text(&self, text: &str) -> Result<(), StoreError> {
        self.lock()?.about = Some(text.to_string());
        Ok(())
    }

    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        let mut departments = self.lock()?.departments.clone();
        departments.sort_by_key(|d| d.sort_order);
        Ok(departments)
    }

    async fn add_department(&self, name: &str) -> Result<Department, StoreError> {
        let mut inner = self.lock()?;
        let name = name.trim();
        if inner
            .departments
            .iter()
            .any(|d| d.name.to_lowercase() == name.to_lowercase())
        {
            return Err(StoreError::Conflict("Department already exists".into()));
        }
        let department = Department {
            id: inner.id("dept"),
            name: name.to_string(),
            sort_order: inner.departments.len() as i32,
        };
        inner.departments.push(department.clone());
        Ok(department)
    }

    async fn delete_department(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let before = inner.departments.len();
        inner.departments.retain(|d| d.id != id);
        if inner.departments.len() == before {
            return Err(StoreError::NotFound(format!("department {id}")));
        }
        Ok(())
    }

    async fn list_members(&self) -> Result<Vec<MemberRecord>, StoreError> {
        let mut members = self.lock()?.members.clone();
        members.sort_by_key(|m| m.sort_order);
        Ok(members)
    }

    async fn insert_member(&self, draft: &MemberDraft) -> Result<MemberRecord, StoreError> {
        let mut inner = self.lock()?;
        let record = MemberRecord {
            id: inner.id("member"),
            name: draft.name.trim().to_string(),
            role: draft.role.trim().to_string(),
            department_id: draft.department_id.clone(),
            image_url: draft.image_url.clone(),
            sort_order: inner.members.len() as i32,
        };
        inner.members.push(record.clone());
        Ok(record)
    }

    async fn update_member(
        &self,
        id: &str,
        draft: &MemberDraft,
    ) -> Result<MemberRecord, StoreError> {
        let mut inner = self.lock()?;
        let record = inner
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("member {id}")))?;
        record.name = draft.name.trim().to_string();
        record.role = draft.role.trim().to_string();
        record.department_id = draft.department_id.clone();
        if let Some(url) = &draft.image_url {
            record.image_url = Some(url.clone());
        }
        Ok(record.clone())
    }

    async fn delete_member(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let before = inner.members.len();
        inner.members.retain(|m| m.id != id);
        if inner.members.len() == before {
            return Err(StoreError::NotFound(format!("member {id}")));
        }
        Ok(())
    }

    async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
        Ok(self.lock()?.events.iter().rev().cloned().collect())
    }

    async fn insert_event(&self, draft: &EventDraft) -> Result<Event, StoreError> {
        let mut inner = self.lock()?;
        let id = inner.id("event");
        let event = event_from_draft(id, draft, draft.hero_image.clone());
        inner.events.push(event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: &str, draft: &EventDraft) -> Result<Event, StoreError> {
        let mut inner = self.lock()?;
        let existing = inner
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(format!("event {id}")))?;
        let hero = draft.hero_image.clone().or_else(|| existing.hero_image.clone());
        *existing = event_from_draft(id.to_string(), draft, hero);
        Ok(existing.clone())
    }

    async fn delete_event(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let before = inner.events.len();
        inner.events.retain(|e| e.id != id);
        if inner.events.len() == before {
            return Err(StoreError::NotFound(format!("event {id}")));
        }
        Ok(())
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryImage>, StoreError> {
        let mut gallery = self.lock()?.gallery.clone();
        gallery.sort_by_key(|g| g.sort_order);
        Ok(gallery)
    }

    async fn insert_gallery_image(
        &self,
        image: &NewGalleryImage,
    ) -> Result<GalleryImage, StoreError> {
        let mut inner = self.lock()?;
        let stored = GalleryImage {
            id: inner.id("image"),
            url: image.url.clone(),
            alt: image
                .alt
                .as_deref()
                .and_then(non_empty)
                .unwrap_or_else(|| DEFAULT_ALT_TEXT.to_string()),
            sort_order: inner.gallery.len() as i32,
        };
        inner.gallery.push(stored.clone());
        Ok(stored)
    }

    async fn delete_gallery_image(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let before = inner.gallery.len();
        inner.gallery.retain(|g| g.id != id);
        if inner.gallery.len() == before {
            return Err(StoreError::NotFound(format!("gallery image {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{resolve_members, EventStatus, UNKNOWN_DEPARTMENT};

    fn member_draft(name: &str, role: &str, department_id: Option<&str>) -> MemberDraft {
        MemberDraft {
            name: name.to_string(),
            role: role.to_string(),
            department_id: department_id.map(str::to_string),
            image_url: None,
        }
    }

    fn event_draft(title: &str) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            date: "17 September 2025".to_string(),
            description: "Short".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_about_text() {
        let store = MemoryStore::new();
        assert_eq!(store.get_about_text().await.unwrap(), None);
        store.set_about_text("We organise things.").await.unwrap();
        assert_eq!(
            store.get_about_text().await.unwrap().as_deref(),
            Some("We organise things.")
        );
    }

    #[tokio::test]
    async fn test_departments_sort_order_and_conflict() {
        let store = MemoryStore::new();
        let a = store.add_department("Core").await.unwrap();
        let b = store.add_department(" Sports ").await.unwrap();
        assert_eq!(a.sort_order, 0);
        assert_eq!(b.sort_order, 1);
        assert_eq!(b.name, "Sports");

        let err = store.add_department("sports").await.unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));

        let names: Vec<String> = store
            .list_departments()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, ["Core", "Sports"]);
    }

    #[tokio::test]
    async fn test_deleting_department_keeps_its_members() {
        let store = MemoryStore::new();
        let sports = store.add_department("Sports").await.unwrap();
        store
            .insert_member(&member_draft("Asha", "Head", Some(&sports.id)))
            .await
            .unwrap();

        store.delete_department(&sports.id).await.unwrap();

        let records = store.list_members().await.unwrap();
        assert_eq!(records.len(), 1);
        let departments = store.list_departments().await.unwrap();
        let members = resolve_members(&records, &departments);
        assert_eq!(members[0].dept, UNKNOWN_DEPARTMENT);
    }

    #[tokio::test]
    async fn test_member_update_keeps_image_when_none() {
        let store = MemoryStore::new();
        let mut draft = member_draft("Asha", "Head", None);
        draft.image_url = Some("/uploads/team/1-asha.png".into());
        let record = store.insert_member(&draft).await.unwrap();
        assert_eq!(record.sort_order, 0);

        let updated = store
            .update_member(&record.id, &member_draft("Asha K", "Vice Head", None))
            .await
            .unwrap();
        assert_eq!(updated.name, "Asha K");
        assert_eq!(updated.image_url.as_deref(), Some("/uploads/team/1-asha.png"));

        let second = store.insert_member(&member_draft("Ravi", "Secretary", None)).await.unwrap();
        assert_eq!(second.sort_order, 1);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.delete_member("nope").await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.update_event("nope", &event_draft("x")).await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_gallery_image("nope").await,
            Err(StoreError::NotFound(_))
        ));
        assert!(matches!(
            store.delete_department("nope").await,
            Err(StoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_events_newest_first_and_hero_kept() {
        let store = MemoryStore::new();
        let mut first = event_draft("Freshers Welcome");
        first.hero_image = Some("/uploads/events/hero.png".into());
        let first = store.insert_event(&first).await.unwrap();
        store.insert_event(&event_draft("Cricket Cup")).await.unwrap();

        let titles: Vec<String> = store
            .list_events()
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, ["Cricket Cup", "Freshers Welcome"]);

        let mut edit = event_draft("Freshers Welcome 2025");
        edit.status = EventStatus::Past;
        edit.full_description = "   ".into();
        let updated = store.update_event(&first.id, &edit).await.unwrap();
        assert_eq!(updated.hero_image.as_deref(), Some("/uploads/events/hero.png"));
        assert_eq!(updated.full_description, None);
        assert!(updated.is_past());
    }

    #[tokio::test]
    async fn test_gallery_default_alt() {
        let store = MemoryStore::new();
        let img = store
            .insert_gallery_image(&NewGalleryImage {
                url: "/uploads/gallery/1-a.png".into(),
                alt: Some(" ".into()),
            })
            .await
            .unwrap();
        assert_eq!(img.alt, DEFAULT_ALT_TEXT);

        store.delete_gallery_image(&img.id).await.unwrap();
        assert!(store.list_gallery().await.unwrap().is_empty());
    }
}
