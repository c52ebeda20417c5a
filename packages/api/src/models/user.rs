//! # Account model
//!
//! [`User`] is the full `users` row and only exists on the server. The client
//! sees [`store::UserInfo`], which drops the password hash and adds whether the
//! account holds the admin role.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use store::UserInfo;
use uuid::Uuid;

/// Full user record from the database.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Convert to UserInfo for client consumption.
    pub fn to_info(&self, is_admin: bool) -> UserInfo {
        UserInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            is_admin,
        }
    }
}
