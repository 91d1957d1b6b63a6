//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Business Rules**: Upload quotas, ownership checks, nickname validation
//! - **Orchestration**: Coordinating repository calls and the GitHub API
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod share;
pub mod user;

#[cfg(test)]
mod test;
