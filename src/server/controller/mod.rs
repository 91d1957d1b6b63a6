//! HTTP request handlers.
//!
//! Controllers extract query, body and session, call the service layer and wrap the
//! result in the `{ code, msg, data }` envelope. Failures are returned as `AppError`,
//! which renders the same envelope.

pub mod auth;
pub mod plan;
pub mod share;
pub mod user;
