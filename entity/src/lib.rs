//! SeaORM entities for the Inke database schema.

pub mod prelude;

pub mod share_note;
pub mod user;
