//! Admin role management rules.

use serde::{Deserialize, Serialize};

use crate::validate::ValidationError;

/// Role name stored for administrators.
pub const ADMIN_ROLE: &str = "admin";

/// An account holding the admin role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminEntry {
    pub user_id: String,
    pub email: String,
    /// RFC 3339 timestamp of the grant.
    pub granted_at: String,
}

/// Refuse revoking one's own admin role before any call is made. Ids compare
/// ignoring case and surrounding whitespace.
pub fn check_revoke(current_user_id: &str, target_user_id: &str) -> Result<(), ValidationError> {
    if current_user_id
        .trim()
        .eq_ignore_ascii_case(target_user_id.trim())
    {
        return Err(ValidationError::SelfRevoke);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_revoke_is_refused() {
        assert_eq!(check_revoke("u1", "u1"), Err(ValidationError::SelfRevoke));
        assert_eq!(check_revoke("u1", "u2"), Ok(()));
    }

    #[test]
    fn test_self_revoke_ignores_id_case() {
        let id = "3f2b8c1e-9d4a-4b6e-8f10-2c7a5e9d1b34";
        assert_eq!(
            check_revoke(id, &id.to_uppercase()),
            Err(ValidationError::SelfRevoke)
        );
        assert_eq!(
            check_revoke(id, &format!(" {id} ")),
            Err(ValidationError::SelfRevoke)
        );
    }
}
