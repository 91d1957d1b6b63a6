use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, user::UserError, AppError},
    model::user::{normalize_nickname, UpdateNicknameParam, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Renames the session user.
    ///
    /// # Arguments
    /// - `session_user` - The logged-in user
    /// - `param` - Target user id and the requested nickname
    ///
    /// # Returns
    /// - `Ok(User)` - The renamed user
    /// - `Err(UserError::NotOwnAccount)` - `param.user_id` is not the session user
    /// - `Err(UserError::InvalidNickname)` - Trimmed name is not 3-20 characters
    pub async fn update_nickname(
        &self,
        session_user: &User,
        param: UpdateNicknameParam,
    ) -> Result<User, AppError> {
        if param.user_id != session_user.id {
            tracing::warn!(
                user_id = %session_user.id,
                target = %param.user_id,
                "User attempted to rename another account"
            );
            return Err(UserError::NotOwnAccount.into());
        }

        let Some(name) = normalize_nickname(&param.name) else {
            return Err(UserError::InvalidNickname.into());
        };

        let Some(user) = UserRepository::new(self.db)
            .update_name(&session_user.id, name)
            .await?
        else {
            return Err(AuthError::UserNotInDatabase(session_user.id.clone()).into());
        };

        Ok(user)
    }
}
