use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiErrorDto, ApiResponse},
        user::{UpdateNicknameDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::UpdateNicknameParam,
        service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// GET /api/users - Profile of the logged-in user
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The session user", body = ApiResponse<UserDto>),
        (status = "default", description = "Envelope code 401 when logged out", body = ApiErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Successed!", user.into_dto())),
    ))
}

/// POST /api/users - Change the logged-in user's nickname
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = UpdateNicknameDto,
    responses(
        (status = 200, description = "Nickname updated", body = ApiResponse<UserDto>),
        (status = "default", description = "Envelope code 401 when logged out, 403 for another account or a nickname outside 3-20 characters", body = ApiErrorDto)
    ),
)]
pub async fn update_nickname(
    State(state): State<AppState>,
    session: Session,
    payload: Result<Json<UpdateNicknameDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;
    let Json(body) = payload?;

    let updated = UserService::new(&state.db)
        .update_nickname(
            &user,
            UpdateNicknameParam {
                user_id: body.user_id,
                name: body.user_name,
            },
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::ok("Successed!", updated.into_dto())),
    ))
}
