//! Server function bodies.
//!
//! Each function here backs one server function in [`crate`],
//! [`crate::content`] or [`crate::admins`] and returns an [`ApiError`]; the
//! server function maps it to `ServerFnError`. Mutations check admin rights
//! first and re-run the shared validation before touching the database.

use store::models::resolve_members;
use store::validate::{
    normalize_email, validate_credentials, validate_department_name, validate_event,
    validate_member,
};
use store::{
    AdminEntry, ContentStore, Department, Event, EventDraft, GalleryImage, ImageUpload, Member,
    MemberDraft, NewGalleryImage, UserInfo,
};
use tower_sessions::Session;

use crate::auth::{self, roles};
use crate::db::get_pool;
use crate::error::ApiError;
use crate::models::User;
use crate::pg::PgContentStore;
use crate::uploads::{save_upload, UploadKind};

async fn content_store() -> Result<PgContentStore, ApiError> {
    Ok(PgContentStore::new(get_pool().await?))
}

async fn admin_store(session: &Session) -> Result<PgContentStore, ApiError> {
    let pool = get_pool().await?;
    auth::require_admin(session, pool).await?;
    Ok(PgContentStore::new(pool))
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

pub async fn current_user(session: &Session) -> Result<Option<UserInfo>, ApiError> {
    let Some(user_id) = auth::current_user_id(session).await? else {
        return Ok(None);
    };
    let pool = get_pool().await?;
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    let Some(user) = user else {
        return Ok(None);
    };
    let is_admin = roles::is_admin(pool, user.id).await?;
    Ok(Some(user.to_info(is_admin)))
}

pub async fn register(
    session: &Session,
    email: &str,
    password: &str,
) -> Result<UserInfo, ApiError> {
    validate_credentials(email, password, None)?;
    let email = normalize_email(email);
    let pool = get_pool().await?;

    let password_hash = auth::hash_password(password)?;
    let result: Result<User, sqlx::Error> = sqlx::query_as(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) RETURNING *",
    )
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await;
    let user = match result {
        Ok(user) => user,
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            return Err(ApiError::Conflict(
                "An account with this email already exists".into(),
            ));
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!("Registered account {}", user.email);

    finish_sign_in(session, pool, user).await
}

pub async fn login(session: &Session, email: &str, password: &str) -> Result<UserInfo, ApiError> {
    validate_credentials(email, password, None)?;
    let email = normalize_email(email);
    let pool = get_pool().await?;

    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;
    let Some(user) = user else {
        return Err(ApiError::InvalidCredentials);
    };
    if !auth::verify_password(password, &user.password_hash)? {
        return Err(ApiError::InvalidCredentials);
    }

    finish_sign_in(session, pool, user).await
}

async fn finish_sign_in(
    session: &Session,
    pool: &sqlx::PgPool,
    user: User,
) -> Result<UserInfo, ApiError> {
    roles::bootstrap(pool, &user).await?;
    auth::sign_in(session, user.id).await?;
    let is_admin = roles::is_admin(pool, user.id).await?;
    Ok(user.to_info(is_admin))
}

pub async fn logout(session: &Session) -> Result<(), ApiError> {
    session.flush().await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

pub async fn about_text() -> Result<Option<String>, ApiError> {
    Ok(content_store().await?.get_about_text().await?)
}

pub async fn save_about_text(session: &Session, text: &str) -> Result<(), ApiError> {
    let store = admin_store(session).await?;
    store.set_about_text(text.trim()).await?;
    Ok(())
}

pub async fn departments() -> Result<Vec<Department>, ApiError> {
    Ok(content_store().await?.list_departments().await?)
}

pub async fn add_department(session: &Session, name: &str) -> Result<Department, ApiError> {
    let store = admin_store(session).await?;
    let existing = store.list_departments().await?;
    let name = validate_department_name(name, &existing)?;
    let department = store.add_department(&name).await?;
    tracing::info!("Added department {}", department.name);
    Ok(department)
}

pub async fn delete_department(session: &Session, id: &str) -> Result<(), ApiError> {
    let store = admin_store(session).await?;
    store.delete_department(id).await?;
    tracing::info!("Deleted department {}", id);
    Ok(())
}

pub async fn members() -> Result<Vec<Member>, ApiError> {
    let store = content_store().await?;
    let departments = store.list_departments().await?;
    let records = store.list_members().await?;
    Ok(resolve_members(&records, &departments))
}

pub async fn save_member(
    session: &Session,
    id: Option<String>,
    mut draft: MemberDraft,
    photo: Option<ImageUpload>,
) -> Result<Member, ApiError> {
    let store = admin_store(session).await?;
    validate_member(&draft)?;

    if let Some(photo) = &photo {
        draft.image_url = Some(save_upload(UploadKind::MemberPhoto, photo).await?);
    }

    let record = match id {
        Some(id) => store.update_member(&id, &draft).await?,
        None => store.insert_member(&draft).await?,
    };
    let departments = store.list_departments().await?;
    Ok(Member::resolve(&record, &departments))
}

pub async fn delete_member(session: &Session, id: &str) -> Result<(), ApiError> {
    let store = admin_store(session).await?;
    store.delete_member(id).await?;
    Ok(())
}

pub async fn events() -> Result<Vec<Event>, ApiError> {
    Ok(content_store().await?.list_events().await?)
}

pub async fn save_event(
    session: &Session,
    id: Option<String>,
    mut draft: EventDraft,
    hero: Option<ImageUpload>,
    gallery: Vec<ImageUpload>,
) -> Result<Event, ApiError> {
    let store = admin_store(session).await?;
    validate_event(&draft)?;

    // Image failures do not stop the event from being saved.
    if let Some(hero) = &hero {
        match save_upload(UploadKind::EventHero, hero).await {
            Ok(url) => draft.hero_image = Some(url),
            Err(e) => tracing::warn!("Skipping hero image {}: {}", hero.file_name, e),
        }
    }
    for (index, image) in gallery.iter().enumerate() {
        match save_upload(UploadKind::EventGallery(index), image).await {
            Ok(url) => draft.gallery.push(url),
            Err(e) => tracing::warn!("Skipping gallery image {}: {}", image.file_name, e),
        }
    }

    let event = match id {
        Some(id) => store.update_event(&id, &draft).await?,
        None => store.insert_event(&draft).await?,
    };
    tracing::info!("Saved event {}", event.title);
    Ok(event)
}

pub async fn delete_event(session: &Session, id: &str) -> Result<(), ApiError> {
    let store = admin_store(session).await?;
    store.delete_event(id).await?;
    Ok(())
}

pub async fn gallery() -> Result<Vec<GalleryImage>, ApiError> {
    Ok(content_store().await?.list_gallery().await?)
}

pub async fn add_gallery_image(
    session: &Session,
    image: ImageUpload,
    alt: Option<String>,
) -> Result<GalleryImage, ApiError> {
    let store = admin_store(session).await?;
    let url = save_upload(UploadKind::Gallery, &image).await?;
    Ok(store
        .insert_gallery_image(&NewGalleryImage { url, alt })
        .await?)
}

pub async fn delete_gallery_image(session: &Session, id: &str) -> Result<(), ApiError> {
    let store = admin_store(session).await?;
    store.delete_gallery_image(id).await?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Admin roles
// ---------------------------------------------------------------------------

pub async fn admins(session: &Session) -> Result<Vec<AdminEntry>, ApiError> {
    let pool = get_pool().await?;
    auth::require_admin(session, pool).await?;
    Ok(roles::list(pool).await?)
}

pub async fn grant_admin(session: &Session, email: &str) -> Result<AdminEntry, ApiError> {
    let pool = get_pool().await?;
    auth::require_admin(session, pool).await?;

    let email = normalize_email(email);
    if email.is_empty() {
        return Err(ApiError::Validation(store::ValidationError::MissingFields));
    }
    let user: Option<User> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&email)
        .fetch_optional(pool)
        .await?;
    let Some(user) = user else {
        return Err(ApiError::NotFound(format!("No account found for {email}")));
    };

    roles::grant(pool, user.id).await?;
    tracing::info!("Granted admin role to {}", user.email);

    roles::list(pool)
        .await?
        .into_iter()
        .find(|a| a.user_id == user.id.to_string())
        .ok_or_else(|| ApiError::Internal("granted role not found".into()))
}

pub async fn revoke_admin(session: &Session, user_id: &str) -> Result<(), ApiError> {
    let pool = get_pool().await?;
    let current = auth::require_admin(session, pool).await?;
    let target = roles::revoke_target(current, user_id)?;
    roles::revoke(pool, target).await?;
    tracing::info!("Revoked admin role from {}", user_id);
    Ok(())
}
