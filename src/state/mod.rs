//! Shared client-side state modules.
//!
//! State is split by domain (`auth`, `lang`, `permissions`, `chat`) so the
//! routing pipeline and individual components can depend on small focused
//! models.

pub mod auth;
pub mod chat;
pub mod lang;
pub mod permissions;
