use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory, factory::share_note::ShareNoteFactory};

use super::{app_state, envelope};
use crate::{
    model::share::{CreateShareDto, ShareIdQuery},
    server::{controller::share, middleware::session::AuthSession},
};

mod delete_share;
mod get_share;
mod get_user_shares;
mod keep_share;

fn id_query(id: &str) -> Query<ShareIdQuery> {
    Query(ShareIdQuery {
        id: Some(id.to_string()),
    })
}

fn note_body(value: serde_json::Value) -> CreateShareDto {
    serde_json::from_value(value).unwrap()
}
