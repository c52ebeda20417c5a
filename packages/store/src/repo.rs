//! # Content store: the data access boundary of the site
//!
//! [`ContentStore`] is the async interface every backend implements: the
//! Postgres store used by the server, and [`crate::MemoryStore`] for tests and
//! local development. Callers only see [`MemoryStore`](crate::MemoryStore)-like
//! semantics; nothing here knows about SQL or files.
//!
//! ## Semantics shared by all backends
//!
//! | Collection | List order | Notes |
//! |------------|-----------|-------|
//! | about text | n/a | single value, `None` until first saved |
//! | departments | `sort_order`, then insertion | names are unique (case-insensitive); new rows get `sort_order = count` |
//! | team members | `sort_order`, then insertion | new rows get `sort_order = count`; deleting a department leaves its members in place |
//! | events | newest first | an update with `hero_image = None` keeps the current hero |
//! | gallery images | `sort_order`, then insertion | missing alt text becomes [`DEFAULT_ALT_TEXT`](crate::models::DEFAULT_ALT_TEXT) |
//!
//! Updates and deletes of a missing id return [`StoreError::NotFound`].

use std::future::Future;

use crate::models::{
    Department, Event, EventDraft, GalleryImage, MemberDraft, MemberRecord, NewGalleryImage,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("storage error: {0}")]
    Backend(String),
}

/// Async access to the site's content.
pub trait ContentStore {
    fn get_about_text(&self) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;
    fn set_about_text(&self, text: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn list_departments(&self) -> impl Future<Output = Result<Vec<Department>, StoreError>> + Send;
    fn add_department(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Department, StoreError>> + Send;
    fn delete_department(&self, id: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn list_members(&self) -> impl Future<Output = Result<Vec<MemberRecord>, StoreError>> + Send;
    fn insert_member(
        &self,
        draft: &MemberDraft,
    ) -> impl Future<Output = Result<MemberRecord, StoreError>> + Send;
    fn update_member(
        &self,
        id: &str,
        draft: &MemberDraft,
    ) -> impl Future<Output = Result<MemberRecord, StoreError>> + Send;
    fn delete_member(&self, id: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn list_events(&self) -> impl Future<Output = Result<Vec<Event>, StoreError>> + Send;
    fn insert_event(
        &self,
        draft: &EventDraft,
    ) -> impl Future<Output = Result<Event, StoreError>> + Send;
    fn update_event(
        &self,
        id: &str,
        draft: &EventDraft,
    ) -> impl Future<Output = Result<Event, StoreError>> + Send;
    fn delete_event(&self, id: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    fn list_gallery(&self) -> impl Future<Output = Result<Vec<GalleryImage>, StoreError>> + Send;
    fn insert_gallery_image(
        &self,
        image: &NewGalleryImage,
    ) -> impl Future<Output = Result<GalleryImage, StoreError>> + Send;
    fn delete_gallery_image(&self, id: &str)
        -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Trim optional form text, mapping blank to `None`.
pub fn non_empty(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("  "), None);
        assert_eq!(non_empty(" Sports "), Some("Sports".to_string()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(StoreError::NotFound("event e1".into()).to_string(), "event e1 not found");
        assert_eq!(
            StoreError::Conflict("Department already exists".into()).to_string(),
            "Department already exists"
        );
    }
}
