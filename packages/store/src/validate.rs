//! Form validation shared by the admin panel, the sign-in form and the server.

use crate::models::{Department, EventDraft, MemberDraft};

/// Minimum password length for new and existing accounts.
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name and Role required")]
    MemberIncomplete,
    #[error("Title and Date required")]
    EventIncomplete,
    #[error("Department name required")]
    DepartmentNameMissing,
    #[error("A department with this name already exists")]
    DepartmentExists,
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("An image file is required")]
    ImageMissing,
    #[error("You cannot revoke your own admin access")]
    SelfRevoke,
}

pub fn validate_member(draft: &MemberDraft) -> Result<(), ValidationError> {
    if draft.name.trim().is_empty() || draft.role.trim().is_empty() {
        return Err(ValidationError::MemberIncomplete);
    }
    Ok(())
}

pub fn validate_event(draft: &EventDraft) -> Result<(), ValidationError> {
    if draft.title.trim().is_empty() || draft.date.trim().is_empty() {
        return Err(ValidationError::EventIncomplete);
    }
    Ok(())
}

/// Check a new department name against the existing ones. Returns the trimmed name.
pub fn validate_department_name(
    name: &str,
    existing: &[Department],
) -> Result<String, ValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ValidationError::DepartmentNameMissing);
    }
    let lowered = name.to_lowercase();
    if existing.iter().any(|d| d.name.trim().to_lowercase() == lowered) {
        return Err(ValidationError::DepartmentExists);
    }
    Ok(name.to_string())
}

/// Sign-in (`confirm = None`) and sign-up (`confirm = Some`) form rules.
pub fn validate_credentials(
    email: &str,
    password: &str,
    confirm: Option<&str>,
) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() || confirm.is_some_and(str::is_empty) {
        return Err(ValidationError::MissingFields);
    }
    if !looks_like_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if let Some(confirm) = confirm {
        if confirm != password {
            return Err(ValidationError::PasswordMismatch);
        }
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

/// Normalise an email for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_requires_name_and_role() {
        let mut draft = MemberDraft {
            name: "Asha".into(),
            role: "  ".into(),
            ..Default::default()
        };
        assert_eq!(validate_member(&draft), Err(ValidationError::MemberIncomplete));
        draft.role = "Head".into();
        assert_eq!(validate_member(&draft), Ok(()));
        assert_eq!(
            ValidationError::MemberIncomplete.to_string(),
            "Name and Role required"
        );
    }

    #[test]
    fn test_event_requires_title_and_date() {
        let mut draft = EventDraft {
            title: "Cricket Cup".into(),
            ..Default::default()
        };
        assert_eq!(validate_event(&draft), Err(ValidationError::EventIncomplete));
        draft.date = "November 10, 2024".into();
        assert_eq!(validate_event(&draft), Ok(()));
    }

    #[test]
    fn test_department_name() {
        let existing = vec![Department {
            id: "d1".into(),
            name: "Technical".into(),
            sort_order: 0,
        }];
        assert_eq!(
            validate_department_name("  ", &existing),
            Err(ValidationError::DepartmentNameMissing)
        );
        assert_eq!(
            validate_department_name(" technical ", &existing),
            Err(ValidationError::DepartmentExists)
        );
        assert_eq!(
            validate_department_name(" Media ", &existing).as_deref(),
            Ok("Media")
        );
    }

    #[test]
    fn test_credentials() {
        assert_eq!(
            validate_credentials("", "secret1", None),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_credentials("a@b.c", "secret1", Some("")),
            Err(ValidationError::MissingFields)
        );
        assert_eq!(
            validate_credentials("not-an-email", "secret1", None),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_credentials("a@b.c", "secret1", Some("secret2")),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            validate_credentials("a@b.c", "abc", Some("abc")),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(validate_credentials(" a@b.c ", "secret1", Some("secret1")), Ok(()));
        assert_eq!(validate_credentials("a@b.c", "secret1", None), Ok(()));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Admin@Example.COM "), "admin@example.com");
    }
}
