use crate::server::{data::share_note::ShareNoteRepository, model::share::CreateShareNoteParam};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::share_note::ShareNoteFactory};

mod create;
mod get_by_user;
mod increment_keeps;
mod update_data;
