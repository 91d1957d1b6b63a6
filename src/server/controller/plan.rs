use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ApiResponse, plan::PlansDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, model::plan::AccountPlan, state::AppState,
    },
};

pub static PLAN_TAG: &str = "plan";

/// GET /api/plans - The plan table, plus the caller's plan when logged in
#[utoipa::path(
    get,
    path = "/api/plans",
    tag = PLAN_TAG,
    responses(
        (status = 200, description = "All plans; activeIndex is null for anonymous callers", body = ApiResponse<PlansDto>)
    ),
)]
pub async fn get_plans(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).optional().await?;

    let plans = PlansDto {
        plans: AccountPlan::ALL.iter().map(|p| p.into_dto()).collect(),
        active_index: user.map(|u| u.plan.index()),
    };

    Ok((StatusCode::OK, Json(ApiResponse::ok("Successed!", plans))))
}
