pub use sea_orm_migration::prelude::*;

mod m20231101_000001_create_user_table;
mod m20231101_000002_create_share_note_table;
mod m20231108_000003_add_share_note_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231101_000001_create_user_table::Migration),
            Box::new(m20231101_000002_create_share_note_table::Migration),
            Box::new(m20231108_000003_add_share_note_indexes::Migration),
        ]
    }
}
