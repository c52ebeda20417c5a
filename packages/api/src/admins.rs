//! Admin role management server functions. All of them require the admin role.

use dioxus::prelude::*;
use store::AdminEntry;

#[cfg(feature = "server")]
use crate::{error::ApiError, service};

#[cfg(feature = "server")]
#[get("/api/admins", session: tower_sessions::Session)]
pub async fn list_admins() -> Result<Vec<AdminEntry>, ServerFnError> {
    service::admins(&session)
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[get("/api/admins")]
pub async fn list_admins() -> Result<Vec<AdminEntry>, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Grant the admin role to the account registered with `email`.
#[cfg(feature = "server")]
#[post("/api/admins/grant", session: tower_sessions::Session)]
pub async fn grant_admin(email: String) -> Result<AdminEntry, ServerFnError> {
    service::grant_admin(&session, &email)
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/admins/grant")]
pub async fn grant_admin(email: String) -> Result<AdminEntry, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}

/// Revoke another user's admin role. Revoking one's own is refused.
#[cfg(feature = "server")]
#[post("/api/admins/revoke", session: tower_sessions::Session)]
pub async fn revoke_admin(user_id: String) -> Result<(), ServerFnError> {
    service::revoke_admin(&session, &user_id)
        .await
        .map_err(ApiError::into_server_fn_error)
}

#[cfg(not(feature = "server"))]
#[post("/api/admins/revoke")]
pub async fn revoke_admin(user_id: String) -> Result<(), ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
