use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::api::ApiErrorDto,
    server::{
        error::{auth::AuthError, AppError},
        middleware::session::{AuthSession, CsrfSession},
        service::auth::GithubAuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Query parameters GitHub sends to the OAuth callback.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code to exchange for an access token.
    pub code: String,
}

#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to the GitHub authorize page")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = GithubAuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().clone())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(CallbackParams),
    responses(
        (status = 307, description = "Logged in; redirect to the web app"),
        (status = "default", description = "Envelope code 403 on CSRF mismatch, missing code or state, or an account without email", body = ApiErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!("Malformed OAuth callback: {}", rejection);
        AuthError::CsrfValidationFailed
    })?;

    validate_csrf(&session, &params.state).await?;

    let auth_service = GithubAuthService::new(&state.db, &state.http_client, &state.oauth_client);
    let user = auth_service.callback(params.code).await?;

    session.cycle_id().await?;
    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok(Redirect::temporary(&state.app_url))
}

#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared; redirect to the web app")
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::temporary(&state.app_url))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if stored_state.as_deref() == Some(csrf_state) {
        return Ok(());
    }

    Err(AuthError::CsrfValidationFailed.into())
}
