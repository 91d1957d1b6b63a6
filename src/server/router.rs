use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, plan, share, user},
    state::AppState,
};

/// OpenAPI document assembled from the handler annotations.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inke API",
        description = "Note sharing, profile and plan endpoints of the Inke editor"
    ),
    paths(
        share::get_share,
        share::create_share,
        share::delete_share,
        share::get_user_shares,
        share::keep_share,
        user::get_user,
        user::update_nickname,
        plan::get_plans,
        auth::login,
        auth::callback,
        auth::logout,
    ),
    tags(
        (name = "share", description = "Publish, read and remove shared notes"),
        (name = "user", description = "Profile of the logged-in user"),
        (name = "plan", description = "Account plans and quotas"),
        (name = "auth", description = "GitHub login")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/share",
            get(share::get_share)
                .post(share::create_share)
                .delete(share::delete_share),
        )
        .route("/api/share/all", get(share::get_user_shares))
        .route("/api/share/keep", post(share::keep_share))
        .route("/api/users", get(user::get_user).post(user::update_nickname))
        .route("/api/plans", get(plan::get_plans))
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
