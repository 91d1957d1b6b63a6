//! Share note data repository for database operations.
//!
//! Shares are soft-deleted: every query here ignores rows with `deleted_at` set, so a
//! deleted share is invisible to lookups, counts and listings alike.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::{
    model::share::{CreateShareNoteParam, ShareNote},
    util::id::generate_id,
};

/// Repository providing database operations for published notes.
pub struct ShareNoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShareNoteRepository<'a> {
    /// Creates a new ShareNoteRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Query over shares that have not been deleted.
    fn live() -> Select<entity::share_note::Entity> {
        entity::prelude::ShareNote::find().filter(entity::share_note::Column::DeletedAt.is_null())
    }

    /// Inserts a new share with zeroed counters.
    ///
    /// # Arguments
    /// - `param` - Owner, local note id and serialized payload
    ///
    /// # Returns
    /// - `Ok(ShareNote)` - The created share
    /// - `Err(DbErr)` - Database error during insert (including a missing owner)
    pub async fn create(&self, param: CreateShareNoteParam) -> Result<ShareNote, DbErr> {
        let now = Utc::now();

        let entity = entity::share_note::ActiveModel {
            id: ActiveValue::Set(generate_id()),
            user_id: ActiveValue::Set(param.user_id),
            local_id: ActiveValue::Set(param.local_id),
            data: ActiveValue::Set(param.data),
            click: ActiveValue::Set(0),
            keeps: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Ok(ShareNote::from_entity(entity))
    }

    /// Finds the canonical live share for a local note id.
    ///
    /// When several live shares carry the same local id the oldest one wins.
    ///
    /// # Arguments
    /// - `local_id` - Client-side note id
    /// - `user_id` - Restricts the lookup to one owner; `None` searches every owner
    ///
    /// # Returns
    /// - `Ok(Some(ShareNote))` - Oldest matching live share
    /// - `Ok(None)` - No live share for that local id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_local_id(
        &self,
        local_id: &str,
        user_id: Option<&str>,
    ) -> Result<Option<ShareNote>, DbErr> {
        let mut query = Self::live().filter(entity::share_note::Column::LocalId.eq(local_id));

        if let Some(user_id) = user_id {
            query = query.filter(entity::share_note::Column::UserId.eq(user_id));
        }

        let entity = query
            .order_by_asc(entity::share_note::Column::CreatedAt)
            .one(self.db)
            .await?;

        Ok(entity.map(ShareNote::from_entity))
    }

    /// Finds a live share by its id.
    ///
    /// # Returns
    /// - `Ok(Some(ShareNote))` - Share found and not deleted
    /// - `Ok(None)` - No such share, or it was deleted
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<ShareNote>, DbErr> {
        let entity = Self::live()
            .filter(entity::share_note::Column::Id.eq(id))
            .one(self.db)
            .await?;

        Ok(entity.map(ShareNote::from_entity))
    }

    /// Counts a user's live shares, the figure checked against the plan quota.
    pub async fn count_by_user(&self, user_id: &str) -> Result<u64, DbErr> {
        Self::live()
            .filter(entity::share_note::Column::UserId.eq(user_id))
            .count(self.db)
            .await
    }

    /// Lists a user's live shares, newest first.
    pub async fn get_by_user(&self, user_id: &str) -> Result<Vec<ShareNote>, DbErr> {
        let entities = Self::live()
            .filter(entity::share_note::Column::UserId.eq(user_id))
            .order_by_desc(entity::share_note::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ShareNote::from_entity).collect())
    }

    /// Replaces a live share's payload and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(ShareNote))` - The updated share
    /// - `Ok(None)` - No live share with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_data(&self, id: &str, data: String) -> Result<Option<ShareNote>, DbErr> {
        let Some(entity) = Self::live()
            .filter(entity::share_note::Column::Id.eq(id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::share_note::ActiveModel = entity.into();
        active_model.data = ActiveValue::Set(data);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(ShareNote::from_entity(entity)))
    }

    /// Atomically adds one to a live share's read counter.
    ///
    /// # Returns
    /// - `Ok(true)` - Counter incremented
    /// - `Ok(false)` - No live share with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment_click(&self, id: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::ShareNote::update_many()
            .col_expr(entity::share_note::Column::Click, Expr::cust("click + 1"))
            .filter(entity::share_note::Column::Id.eq(id))
            .filter(entity::share_note::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Atomically adds one to a live share's keeps counter.
    ///
    /// # Returns
    /// - `Ok(Some(ShareNote))` - The share after the increment
    /// - `Ok(None)` - No live share with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn increment_keeps(&self, id: &str) -> Result<Option<ShareNote>, DbErr> {
        let result = entity::prelude::ShareNote::update_many()
            .col_expr(entity::share_note::Column::Keeps, Expr::cust("keeps + 1"))
            .filter(entity::share_note::Column::Id.eq(id))
            .filter(entity::share_note::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.find_by_id(id).await
    }

    /// Marks a live share as deleted.
    ///
    /// # Returns
    /// - `Ok(Some(ShareNote))` - The share with `deleted_at` set
    /// - `Ok(None)` - No live share with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn soft_delete(&self, id: &str) -> Result<Option<ShareNote>, DbErr> {
        let Some(entity) = Self::live()
            .filter(entity::share_note::Column::Id.eq(id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active_model: entity::share_note::ActiveModel = entity.into();
        active_model.deleted_at = ActiveValue::Set(Some(now));
        active_model.updated_at = ActiveValue::Set(now);

        let entity = active_model.update(self.db).await?;

        Ok(Some(ShareNote::from_entity(entity)))
    }
}
