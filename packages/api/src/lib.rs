//! # API crate: fullstack server functions for the committee site
//!
//! Every public `async fn` exported here is a Dioxus server function,
//! annotated with `#[get(...)]` or `#[post(...)]` and compiled twice: once
//! with the server logic (behind `#[cfg(feature = "server")]`) and once as a
//! thin client stub that forwards the call over HTTP.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`auth`] | `server` inside | Password hashing, session helpers, admin role storage |
//! | [`content`] | none | Server functions for about text, departments, members, events, gallery |
//! | [`admins`] | none | Server functions for listing, granting and revoking admin access |
//! | [`db`] | `server` inside | PostgreSQL connection pool (lazy `OnceCell` singleton) |
//! | `error` | `server` | [`ApiError`](error::ApiError) and its mapping to `ServerFnError` |
//! | `pg` | `server` | PostgreSQL implementation of [`store::ContentStore`] |
//! | `service` | `server` | Server function bodies |
//! | `settings` | `server` | Server settings (`config` crate) |
//! | `site` | `server` | Loading `site.toml` |
//! | [`uploads`] | partly `server` | Upload keys and writing files to the uploads directory |
//!
//! ## Server functions defined in this file
//!
//! - **Authentication**: `get_current_user`, `register`, `login_password`, `logout`
//! - **Site**: `get_site_config`

use dioxus::prelude::*;

pub mod admins;
pub mod auth;
pub mod content;
pub mod db;
pub mod models;
pub mod uploads;

#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod pg;
#[cfg(feature = "server")]
mod service;
#[cfg(feature = "server")]
pub mod settings;
#[cfg(feature = "server")]
pub mod site;

pub use admins::{grant_admin, list_admins, revoke_admin};
pub use content::{
    add_department, add_gallery_image, delete_department, delete_event, delete_gallery_image,
    delete_member, get_about_text, list_departments, list_events, list_gallery, list_members,
    save_about_text, save_event, save_member,
};
pub use store::{SiteConfig, UserInfo};

/// Get the current authenticated user from the session.
#[cfg(feature = "server")]
#[get("/api/auth/me", session: tower_sessions::Session)]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    service::current_user(&session)
        .await
        .map_err(error::ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/auth/me")]
pub async fn get_current_user() -> Result<Option<UserInfo>, ServerFnError> {
    Ok(None)
}

/// Create an account with email and password and sign it in.
#[cfg(feature = "server")]
#[post("/api/auth/register", session: tower_sessions::Session)]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    service::register(&session, &email, &password)
        .await
        .map_err(error::ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Sign in with email and password.
#[cfg(feature = "server")]
#[post("/api/auth/login", session: tower_sessions::Session)]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    service::login(&session, &email, &password)
        .await
        .map_err(error::ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/login")]
pub async fn login_password(email: String, password: String) -> Result<UserInfo, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Log out the current user by clearing the session.
#[cfg(feature = "server")]
#[post("/api/auth/logout", session: tower_sessions::Session)]
pub async fn logout() -> Result<(), ServerFnError> {
    service::logout(&session)
        .await
        .map_err(error::ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/logout")]
pub async fn logout() -> Result<(), ServerFnError> {
    Ok(())
}

/// Site identity and roster ordering from `site.toml`.
#[cfg(feature = "server")]
#[get("/api/site/config")]
pub async fn get_site_config() -> Result<SiteConfig, ServerFnError> {
    Ok(site::site_config().clone())
}

#[cfg(not(feature = "server"))]
#[get("/api/site/config")]
pub async fn get_site_config() -> Result<SiteConfig, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
