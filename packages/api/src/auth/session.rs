//! Session helpers.

use sqlx::PgPool;
use tower_sessions::Session;
use uuid::Uuid;

use super::roles;
use crate::error::ApiError;

/// Key for storing user ID in session.
pub const SESSION_USER_ID_KEY: &str = "user_id";

/// The signed-in user's id, if any.
pub async fn current_user_id(session: &Session) -> Result<Option<Uuid>, ApiError> {
    let user_id: Option<String> = session.get(SESSION_USER_ID_KEY).await?;
    Ok(user_id.and_then(|id| Uuid::parse_str(&id).ok()))
}

pub async fn sign_in(session: &Session, user_id: Uuid) -> Result<(), ApiError> {
    session.cycle_id().await?;
    session.insert(SESSION_USER_ID_KEY, user_id.to_string()).await?;
    Ok(())
}

pub async fn require_user(session: &Session) -> Result<Uuid, ApiError> {
    current_user_id(session)
        .await?
        .ok_or(ApiError::Unauthenticated)
}

/// The signed-in user's id, provided they hold the admin role.
pub async fn require_admin(session: &Session, pool: &PgPool) -> Result<Uuid, ApiError> {
    let user_id = require_user(session).await?;
    if !roles::is_admin(pool, user_id).await? {
        return Err(ApiError::Forbidden);
    }
    Ok(user_id)
}
