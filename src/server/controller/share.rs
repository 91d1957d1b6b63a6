use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiErrorDto, ApiResponse},
        share::{CreateShareDto, ShareIdQuery, ShareNoteDto},
    },
    server::{
        error::{share::ShareError, AppError},
        middleware::auth::AuthGuard,
        model::share::SharePayload,
        service::share::ShareService,
        state::AppState,
    },
};

pub static SHARE_TAG: &str = "share";

#[utoipa::path(
    get,
    path = "/api/share",
    tag = SHARE_TAG,
    params(ShareIdQuery),
    responses(
        (status = 200, description = "Share found and its click counted", body = ApiResponse<ShareNoteDto>),
        (status = "default", description = "Envelope code 403 for an empty id, 404 when no live share has that local id", body = ApiErrorDto)
    ),
)]
pub async fn get_share(
    State(state): State<AppState>,
    Query(query): Query<ShareIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let share = ShareService::new(&state.db)
        .find_by_local_id(query.id.as_deref().unwrap_or_default())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Successed!", share.into_dto())),
    ))
}

#[utoipa::path(
    post,
    path = "/api/share",
    tag = SHARE_TAG,
    request_body = CreateShareDto,
    responses(
        (status = 200, description = "Envelope msg is \"Successed!\" for a new share, \"Updated!\" when the note was already shared", body = ApiResponse<ShareNoteDto>),
        (status = "default", description = "Envelope code 401 when logged out, 403 for an empty note id, 405 for a missing note, 429 over quota", body = ApiErrorDto)
    ),
)]
pub async fn create_share(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<CreateShareDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let Json(body) = payload?;
    let Some(note) = body.data else {
        return Err(ShareError::EmptyData.into());
    };

    let outcome = ShareService::new(&state.db)
        .publish(&user, SharePayload::from_note(note)?)
        .await?;

    let msg = outcome.message();
    let share = outcome.into_share();
    tracing::info!(user_id = %user.id, share_id = %share.id, "{}", msg);

    Ok((StatusCode::OK, Json(ApiResponse::ok(msg, share.into_dto()))))
}

#[utoipa::path(
    delete,
    path = "/api/share",
    tag = SHARE_TAG,
    params(ShareIdQuery),
    responses(
        (status = 200, description = "Share deleted", body = ApiResponse<ShareNoteDto>),
        (status = "default", description = "Envelope code 401 when logged out, 403 for an empty id, 404 when missing or not owned", body = ApiErrorDto)
    ),
)]
pub async fn delete_share(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ShareIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let share = ShareService::new(&state.db)
        .delete(&user.id, query.id.as_deref().unwrap_or_default())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Successed!", share.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/share/all",
    tag = SHARE_TAG,
    responses(
        (status = 200, description = "The caller's live shares, newest first", body = ApiResponse<Vec<ShareNoteDto>>),
        (status = "default", description = "Envelope code 401 when logged out", body = ApiErrorDto)
    ),
)]
pub async fn get_user_shares(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    let shares = ShareService::new(&state.db).list_for_user(&user.id).await?;
    let shares_dto: Vec<_> = shares.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(ApiResponse::ok("Successed!", shares_dto))))
}

#[utoipa::path(
    post,
    path = "/api/share/keep",
    tag = SHARE_TAG,
    params(ShareIdQuery),
    responses(
        (status = 200, description = "Keeps counter incremented", body = ApiResponse<ShareNoteDto>),
        (status = "default", description = "Envelope code 403 for an empty id, 404 when missing", body = ApiErrorDto)
    ),
)]
pub async fn keep_share(
    State(state): State<AppState>,
    Query(query): Query<ShareIdQuery>,
) -> Result<impl IntoResponse, AppError> {
    let share = ShareService::new(&state.db)
        .keep(query.id.as_deref().unwrap_or_default())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Successed!", share.into_dto())),
    ))
}
