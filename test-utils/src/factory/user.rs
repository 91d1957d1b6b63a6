//! User factory for creating test user entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("writer@inke.app")
///     .name("Writer")
///     .plan("1")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    email: String,
    name: Option<String>,
    image: Option<String>,
    plan: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: `"user_{n}"` where n is auto-incremented
    /// - email: `"user{n}@inke.app"`
    /// - name: `"User {n}"`
    /// - image: `None`
    /// - plan: `"0"` (Free)
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: format!("user_{}", n),
            email: format!("user{}@inke.app", n),
            name: Some(format!("User {}", n)),
            image: None,
            plan: "0".to_string(),
        }
    }

    /// Sets the primary key of the user.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the email address of the user.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the nickname of the user.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Leaves the nickname unset, as for a freshly signed-up account.
    pub fn without_name(mut self) -> Self {
        self.name = None;
        self
    }

    /// Sets the avatar url of the user.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the stored plan value of the user.
    pub fn plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = plan.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            image: ActiveValue::Set(self.image),
            plan: ActiveValue::Set(self.plan),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user on the given plan.
///
/// Shorthand for `UserFactory::new(db).plan(plan).build().await`.
pub async fn create_user_with_plan(
    db: &DatabaseConnection,
    plan: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).plan(plan).build().await
}
