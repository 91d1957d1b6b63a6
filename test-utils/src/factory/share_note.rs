//! Share note factory for creating test share entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shares with customizable fields.
///
/// The default payload is a minimal note JSON whose `id` matches the share's local id.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::share_note::ShareNoteFactory;
///
/// let share = ShareNoteFactory::new(&db, &user.id)
///     .local_id("note-1")
///     .click(10)
///     .build()
///     .await?;
/// ```
pub struct ShareNoteFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    user_id: String,
    local_id: String,
    data: Option<String>,
    click: i32,
    keeps: i32,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl<'a> ShareNoteFactory<'a> {
    /// Creates a new ShareNoteFactory with default values.
    ///
    /// Defaults:
    /// - id: `"share_{n}"` where n is auto-incremented
    /// - local_id: `"local_{n}"`
    /// - data: `{"id": local_id, "title": "Note {n}", "content": {}}`
    /// - click / keeps: `0`
    /// - created_at: now
    /// - deleted_at: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the owning user (must exist)
    pub fn new(db: &'a DatabaseConnection, user_id: &str) -> Self {
        let n = next_id();
        Self {
            db,
            id: format!("share_{}", n),
            user_id: user_id.to_string(),
            local_id: format!("local_{}", n),
            data: None,
            click: 0,
            keeps: 0,
            created_at: Utc::now(),
            deleted_at: None,
        }
    }

    /// Sets the primary key of the share.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the client-side note id.
    pub fn local_id(mut self, local_id: impl Into<String>) -> Self {
        self.local_id = local_id.into();
        self
    }

    /// Sets the raw serialized payload.
    pub fn data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Sets the click counter.
    pub fn click(mut self, click: i32) -> Self {
        self.click = click;
        self
    }

    /// Sets the keeps counter.
    pub fn keeps(mut self, keeps: i32) -> Self {
        self.keeps = keeps;
        self
    }

    /// Sets the creation timestamp (also used as the update timestamp).
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Marks the share as soft-deleted at the current time.
    pub fn deleted(mut self) -> Self {
        self.deleted_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the share entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::share_note::Model)` - Created share entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::share_note::Model, DbErr> {
        let data = self.data.unwrap_or_else(|| {
            serde_json::json!({
                "id": self.local_id,
                "title": format!("Note {}", self.local_id),
                "content": {},
            })
            .to_string()
        });

        entity::share_note::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            local_id: ActiveValue::Set(self.local_id),
            data: ActiveValue::Set(data),
            click: ActiveValue::Set(self.click),
            keeps: ActiveValue::Set(self.keeps),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            deleted_at: ActiveValue::Set(self.deleted_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a share with default values for the given owner.
///
/// Shorthand for `ShareNoteFactory::new(db, user_id).build().await`.
pub async fn create_share(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::share_note::Model, DbErr> {
    ShareNoteFactory::new(db, user_id).build().await
}

/// Creates a share with a specific local id for the given owner.
pub async fn create_share_with_local_id(
    db: &DatabaseConnection,
    user_id: &str,
    local_id: impl Into<String>,
) -> Result<entity::share_note::Model, DbErr> {
    ShareNoteFactory::new(db, user_id)
        .local_id(local_id)
        .build()
        .await
}
