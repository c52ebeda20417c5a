//! Authentication: password hashing, sessions and the admin role.

#[cfg(feature = "server")]
mod password;
#[cfg(feature = "server")]
pub mod roles;
#[cfg(feature = "server")]
mod session;

#[cfg(feature = "server")]
pub use password::{hash_password, verify_password};
#[cfg(feature = "server")]
pub use session::{current_user_id, require_admin, require_user, sign_in, SESSION_USER_ID_KEY};
