//! Admin role storage in `user_roles`.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use store::admin::{check_revoke, AdminEntry, ADMIN_ROLE};
use uuid::Uuid;

use crate::error::ApiError;
use crate::models::User;

pub async fn is_admin(pool: &PgPool, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let row: Option<(i32,)> =
        sqlx::query_as("SELECT 1 FROM user_roles WHERE user_id = $1 AND role = $2")
            .bind(user_id)
            .bind(ADMIN_ROLE)
            .fetch_optional(pool)
            .await?;
    Ok(row.is_some())
}

/// Grant the admin role. Fails with `Conflict` when the user already has it.
pub async fn grant(pool: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
    let result = sqlx::query("INSERT INTO user_roles (user_id, role) VALUES ($1, $2)")
        .bind(user_id)
        .bind(ADMIN_ROLE)
        .execute(pool)
        .await;
    match result {
        Ok(_) => Ok(()),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(ApiError::Conflict("User is already an admin".into()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Parse the id of the account losing the admin role. Ids are compared as
/// UUIDs, so any spelling of the caller's own id is refused.
pub fn revoke_target(current: Uuid, user_id: &str) -> Result<Uuid, ApiError> {
    let target = Uuid::parse_str(user_id.trim())
        .map_err(|_| ApiError::NotFound("User is not an admin".into()))?;
    check_revoke(&current.to_string(), &target.to_string())?;
    Ok(target)
}

pub async fn revoke(pool: &PgPool, user_id: Uuid) -> Result<(), ApiError> {
    let result = sqlx::query("DELETE FROM user_roles WHERE user_id = $1 AND role = $2")
        .bind(user_id)
        .bind(ADMIN_ROLE)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("User is not an admin".into()));
    }
    Ok(())
}

pub async fn list(pool: &PgPool) -> Result<Vec<AdminEntry>, sqlx::Error> {
    let rows: Vec<(Uuid, String, DateTime<Utc>)> = sqlx::query_as(
        "SELECT u.id, u.email, r.created_at FROM user_roles r \
         JOIN users u ON u.id = r.user_id \
         WHERE r.role = $1 ORDER BY r.created_at",
    )
    .bind(ADMIN_ROLE)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, email, granted_at)| AdminEntry {
            user_id: id.to_string(),
            email,
            granted_at: granted_at.to_rfc3339(),
        })
        .collect())
}

/// Make `user` an admin if it matches the configured bootstrap email.
pub async fn bootstrap(pool: &PgPool, user: &User) -> Result<(), sqlx::Error> {
    let Some(email) = crate::settings::settings().bootstrap_email() else {
        return Ok(());
    };
    if user.email != email {
        return Ok(());
    }
    let result = sqlx::query(
        "INSERT INTO user_roles (user_id, role) VALUES ($1, $2) ON CONFLICT DO NOTHING",
    )
    .bind(user.id)
    .bind(ADMIN_ROLE)
    .execute(pool)
    .await?;
    if result.rows_affected() > 0 {
        tracing::info!("Granted admin role to bootstrap account {}", user.email);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::ValidationError;

    const ID: &str = "3f2b8c1e-9d4a-4b6e-8f10-2c7a5e9d1b34";

    #[test]
    fn test_revoke_target_refuses_own_id_in_any_spelling() {
        let current = Uuid::parse_str(ID).unwrap();
        for spelling in [
            ID.to_string(),
            ID.to_uppercase(),
            format!("{{{ID}}}"),
            ID.replace('-', ""),
            format!("urn:uuid:{ID}"),
            format!(" {ID} "),
        ] {
            assert!(
                matches!(
                    revoke_target(current, &spelling),
                    Err(ApiError::Validation(ValidationError::SelfRevoke))
                ),
                "{spelling}"
            );
        }
    }

    #[test]
    fn test_revoke_target_accepts_other_accounts() {
        let current = Uuid::parse_str(ID).unwrap();
        let other = Uuid::new_v4();
        assert_eq!(
            revoke_target(current, &other.to_string().to_uppercase()).unwrap(),
            other
        );
        assert!(matches!(
            revoke_target(current, "not-a-uuid"),
            Err(ApiError::NotFound(_))
        ));
    }
}
