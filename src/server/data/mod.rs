//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models, keeping
//! database types out of the service layer. All queries, inserts and updates go through
//! these structs.

pub mod share_note;
pub mod user;

#[cfg(test)]
mod test;
