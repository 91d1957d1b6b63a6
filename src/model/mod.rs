//! Wire-level DTOs shared by every endpoint.
//!
//! Field names follow the JSON the Inke web client already speaks, so most structs
//! carry `rename_all = "camelCase"`.

pub mod api;
pub mod plan;
pub mod share;
pub mod user;
