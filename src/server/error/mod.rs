//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type. It wraps domain-specific errors and implements
//! `IntoResponse`, rendering every failure as the `{ code, msg, data: null }` envelope the
//! web client expects.

pub mod auth;
pub mod config;
pub mod share;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ApiErrorDto,
    server::error::{auth::AuthError, config::ConfigError, share::ShareError, user::UserError},
};

/// Top-level application error type.
///
/// Domain variants (`AuthErr`, `ShareErr`, `UserErr`) carry their own envelope code and
/// client-facing message. Infrastructure variants always become a 500 envelope with a
/// generic message while the details are logged.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error (not logged in, unknown user, failed OAuth flow).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Share operation rejected (empty id, empty data, quota, not found).
    #[error(transparent)]
    ShareErr(#[from] ShareError),

    /// User operation rejected (invalid nickname, renaming someone else).
    #[error(transparent)]
    UserErr(#[from] UserError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Request body missing or not valid JSON for the endpoint.
    #[error(transparent)]
    JsonRejection(#[from] axum::extract::rejection::JsonRejection),

    /// Socket or listener error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),
}

impl AppError {
    /// Envelope code and client-facing message for domain errors.
    ///
    /// Returns `None` for errors that should surface as a generic 500.
    fn client_error(&self) -> Option<(u16, String)> {
        match self {
            Self::AuthErr(err) => err.client_error(),
            Self::ShareErr(err) => Some((err.code(), err.to_string())),
            Self::UserErr(err) => Some((err.code(), err.to_string())),
            Self::JsonRejection(_) => Some((405, "Empty data".to_string())),
            _ => None,
        }
    }
}

/// Converts application errors into envelope responses.
///
/// The transport status is always 200; the envelope `code` carries the outcome.
///
/// # Returns
/// - 401 / 403 - For authentication failures, see `AuthError`
/// - 403 / 404 / 405 / 429 - For share and user domain errors
/// - 500 - For all infrastructure errors, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.client_error() {
            Some((code, msg)) => {
                tracing::debug!("Request rejected with {}: {}", code, self);
                (StatusCode::OK, Json(ApiErrorDto::new(code, msg))).into_response()
            }
            None => InternalServerError(self).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 envelope.
///
/// Logs the error and returns a generic message so no implementation details leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::OK,
            Json(ApiErrorDto::new(500, "Internal server error")),
        )
            .into_response()
    }
}
