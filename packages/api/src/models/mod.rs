//! Database row models.

#[cfg(feature = "server")]
mod user;

#[cfg(feature = "server")]
pub use user::User;
