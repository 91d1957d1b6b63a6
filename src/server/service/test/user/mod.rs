use crate::server::{
    data::user::UserRepository,
    error::{user::UserError, AppError},
    model::user::UpdateNicknameParam,
    service::user::UserService,
};
use test_utils::{builder::TestBuilder, factory};
