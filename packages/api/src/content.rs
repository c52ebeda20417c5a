//! Content server functions: about text, departments, team members, events
//! and the gallery. Reads are public; every mutation requires the admin role.

use dioxus::prelude::*;
use store::{
    Department, Event, EventDraft, GalleryImage, ImageUpload, Member, MemberDraft,
};

#[cfg(feature = "server")]
use crate::{error::ApiError, service};

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

#[cfg(feature = "server")]
#[get("/api/content/about")]
pub async fn get_about_text() -> Result<Option<String>, ServerFnError> {
    service::about_text()
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/content/about")]
pub async fn get_about_text() -> Result<Option<String>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/content/about/save", session: tower_sessions::Session)]
pub async fn save_about_text(text: String) -> Result<(), ServerFnError> {
    service::save_about_text(&session, &text)
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/content/about/save")]
pub async fn save_about_text(text: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Departments
// ---------------------------------------------------------------------------

#[cfg(feature = "server")]
#[get("/api/departments")]
pub async fn list_departments() -> Result<Vec<Department>, ServerFnError> {
    service::departments()
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/departments")]
pub async fn list_departments() -> Result<Vec<Department>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/departments/add", session: tower_sessions::Session)]
pub async fn add_department(name: String) -> Result<Department, ServerFnError> {
    service::add_department(&session, &name)
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/departments/add")]
pub async fn add_department(name: String) -> Result<Department, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Delete a department. Its members stay and show as "Unknown".
#[cfg(feature = "server")]
#[post("/api/departments/delete", session: tower_sessions::Session)]
pub async fn delete_department(id: String) -> Result<(), ServerFnError> {
    service::delete_department(&session, &id)
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/departments/delete")]
pub async fn delete_department(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Team members
// ---------------------------------------------------------------------------

/// All members with their department names resolved.
#[cfg(feature = "server")]
#[get("/api/members")]
pub async fn list_members() -> Result<Vec<Member>, ServerFnError> {
    service::members()
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/members")]
pub async fn list_members() -> Result<Vec<Member>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create (`id = None`) or update a member, optionally replacing the photo.
#[cfg(feature = "server")]
#[post("/api/members/save", session: tower_sessions::Session)]
pub async fn save_member(
    id: Option<String>,
    draft: MemberDraft,
    photo: Option<ImageUpload>,
) -> Result<Member, ServerFnError> {
    service::save_member(&session, id, draft, photo)
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/members/save")]
pub async fn save_member(
    id: Option<String>,
    draft: MemberDraft,
    photo: Option<ImageUpload>,
) -> Result<Member, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/members/delete", session: tower_sessions::Session)]
pub async fn delete_member(id: String) -> Result<(), ServerFnError> {
    service::delete_member(&session, &id)
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/members/delete")]
pub async fn delete_member(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Events, newest first.
#[cfg(feature = "server")]
#[get("/api/events")]
pub async fn list_events() -> Result<Vec<Event>, ServerFnError> {
    service::events()
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/events")]
pub async fn list_events() -> Result<Vec<Event>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Create or update an event. New gallery uploads are appended to
/// `draft.gallery`; images that fail to store are skipped.
#[cfg(feature = "server")]
#[post("/api/events/save", session: tower_sessions::Session)]
pub async fn save_event(
    id: Option<String>,
    draft: EventDraft,
    hero: Option<ImageUpload>,
    gallery: Vec<ImageUpload>,
) -> Result<Event, ServerFnError> {
    service::save_event(&session, id, draft, hero, gallery)
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/events/save")]
pub async fn save_event(
    id: Option<String>,
    draft: EventDraft,
    hero: Option<ImageUpload>,
    gallery: Vec<ImageUpload>,
) -> Result<Event, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/events/delete", session: tower_sessions::Session)]
pub async fn delete_event(id: String) -> Result<(), ServerFnError> {
    service::delete_event(&session, &id)
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/events/delete")]
pub async fn delete_event(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

#[cfg(feature = "server")]
#[get("/api/gallery")]
pub async fn list_gallery() -> Result<Vec<GalleryImage>, ServerFnError> {
    service::gallery()
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/gallery")]
pub async fn list_gallery() -> Result<Vec<GalleryImage>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/gallery/add", session: tower_sessions::Session)]
pub async fn add_gallery_image(
    image: ImageUpload,
    alt: Option<String>,
) -> Result<GalleryImage, ServerFnError> {
    service::add_gallery_image(&session, image, alt)
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/gallery/add")]
pub async fn add_gallery_image(
    image: ImageUpload,
    alt: Option<String>,
) -> Result<GalleryImage, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

#[cfg(feature = "server")]
#[post("/api/gallery/delete", session: tower_sessions::Session)]
pub async fn delete_gallery_image(id: String) -> Result<(), ServerFnError> {
    service::delete_gallery_image(&session, &id)
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/gallery/delete")]
pub async fn delete_gallery_image(id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
