use axum::{extract::State, Json};
use test_utils::{builder::TestBuilder, factory};

use super::{app_state, envelope};
use crate::{
    model::user::UpdateNicknameDto,
    server::{controller::user, middleware::session::AuthSession},
};

mod update_nickname;
