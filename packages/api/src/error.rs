//! Server-side error type.
//!
//! Everything that can go wrong inside a server function is an [`ApiError`].
//! At the server function boundary it is logged and turned into a
//! `ServerFnError` carrying the display message, which is what the UI shows.

use dioxus::prelude::ServerFnError;
use store::{StoreError, ValidationError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Not authenticated")]
    Unauthenticated,
    #[error("Admin access required")]
    Forbidden,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
    #[error("upload failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Whether the caller caused the failure (bad input, missing rights).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthenticated
                | ApiError::Forbidden
                | ApiError::InvalidCredentials
                | ApiError::Conflict(_)
                | ApiError::NotFound(_)
                | ApiError::Validation(_)
                | ApiError::Store(StoreError::NotFound(_) | StoreError::Conflict(_))
        )
    }

    pub fn into_server_fn_error(self) -> ServerFnError {
        if self.is_client_error() {
            tracing::warn!("request rejected: {}", self);
        } else {
            tracing::error!("request failed: {}", self);
        }
        ServerFnError::new(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through() {
        let err: ApiError = ValidationError::MemberIncomplete.into();
        assert_eq!(err.to_string(), "Name and Role required");
        assert!(err.is_client_error());

        let err: ApiError = StoreError::Conflict("User is already an admin".into()).into();
        assert_eq!(err.to_string(), "User is already an admin");
        assert!(err.is_client_error());

        let err = ApiError::Internal("boom".into());
        assert!(!err.is_client_error());
    }
}
