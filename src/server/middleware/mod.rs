//! Request-scoped helpers shared by controllers.
//!
//! - `session` - Typed wrappers around the tower-sessions `Session`
//! - `auth` - `AuthGuard`, which resolves the logged-in user for protected endpoints

pub mod auth;
pub mod session;
