//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. Users are keyed
//! by a generated id and identified at login by their unique email address.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::server::{
    model::{
        plan::AccountPlan,
        user::{UpsertUserParam, User},
    },
    util::id::generate_id,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user on first login or touches an existing one.
    ///
    /// New users start on the Free plan with the profile name and avatar from the OAuth
    /// provider. On an email conflict only `updated_at` changes, so a nickname the user
    /// picked later survives subsequent logins.
    ///
    /// # Arguments
    /// - `param` - Email plus the provider's name and avatar
    ///
    /// # Returns
    /// - `Ok(User)` - The created or existing user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            id: ActiveValue::Set(generate_id()),
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            image: ActiveValue::Set(param.image),
            plan: ActiveValue::Set(AccountPlan::default().stored()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Email)
                .update_column(entity::user::Column::UpdatedAt)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Sets a user's nickname.
    ///
    /// The name is stored as given; validation happens in the service layer.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The renamed user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_name(&self, user_id: &str, name: String) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::user::ActiveModel = entity.into();
        active_model.name = ActiveValue::Set(Some(name));
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Some(User::from_entity(entity)))
    }
}
