use sea_orm::DatabaseConnection;

use crate::server::{
    data::share_note::ShareNoteRepository,
    error::{share::ShareError, AppError},
    model::{
        share::{CreateShareNoteParam, PublishOutcome, ShareNote, SharePayload},
        user::User,
    },
};

pub struct ShareService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShareService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a published note by its local id and counts the read.
    ///
    /// The returned share is the snapshot read before the click was counted.
    ///
    /// # Returns
    /// - `Ok(ShareNote)` - The canonical live share for that local id
    /// - `Err(ShareError::EmptyId)` - Blank id
    /// - `Err(ShareError::NotFound)` - No live share with that local id
    pub async fn find_by_local_id(&self, local_id: &str) -> Result<ShareNote, AppError> {
        let local_id = non_empty(local_id)?;
        let repo = ShareNoteRepository::new(self.db);

        let Some(share) = repo.find_by_local_id(local_id, None).await? else {
            return Err(ShareError::NotFound.into());
        };

        repo.increment_click(&share.id).await?;

        Ok(share)
    }

    /// Publishes a note for `user`, or refreshes their existing share of it.
    ///
    /// The plan's upload quota is checked first, so a user at their limit cannot
    /// refresh an existing share either.
    ///
    /// # Returns
    /// - `Ok(PublishOutcome::Updated)` - The user already shared this note; payload replaced
    /// - `Ok(PublishOutcome::Created)` - A new share was created
    /// - `Err(ShareError::QuotaExceeded)` - The user's live shares already reach the plan's upload count
    pub async fn publish(
        &self,
        user: &User,
        payload: SharePayload,
    ) -> Result<PublishOutcome, AppError> {
        let repo = ShareNoteRepository::new(self.db);

        let limit = user.plan.limits().note_upload_count;
        let count = repo.count_by_user(&user.id).await?;
        if count >= limit {
            tracing::debug!(user_id = %user.id, count, limit, "Share quota reached");
            return Err(ShareError::QuotaExceeded { limit }.into());
        }

        if let Some(existing) = repo
            .find_by_local_id(&payload.local_id, Some(&user.id))
            .await?
        {
            let Some(updated) = repo.update_data(&existing.id, payload.data).await? else {
                return Err(ShareError::NotFound.into());
            };

            return Ok(PublishOutcome::Updated(updated));
        }

        let share = repo
            .create(CreateShareNoteParam {
                user_id: user.id.clone(),
                local_id: payload.local_id,
                data: payload.data,
            })
            .await?;

        Ok(PublishOutcome::Created(share))
    }

    /// Soft-deletes one of the user's shares.
    ///
    /// Shares owned by someone else are reported as not found.
    ///
    /// # Returns
    /// - `Ok(ShareNote)` - The deleted share
    /// - `Err(ShareError::EmptyId)` - Blank id
    /// - `Err(ShareError::NotFound)` - Missing, already deleted, or not owned by the user
    pub async fn delete(&self, user_id: &str, id: &str) -> Result<ShareNote, AppError> {
        let id = non_empty(id)?;
        let repo = ShareNoteRepository::new(self.db);

        match repo.find_by_id(id).await? {
            Some(share) if share.user_id == user_id => {}
            _ => return Err(ShareError::NotFound.into()),
        }

        let Some(deleted) = repo.soft_delete(id).await? else {
            return Err(ShareError::NotFound.into());
        };

        Ok(deleted)
    }

    /// Lists the user's live shares, newest first.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<ShareNote>, AppError> {
        let shares = ShareNoteRepository::new(self.db)
            .get_by_user(user_id)
            .await?;

        Ok(shares)
    }

    /// Records that a reader kept a copy of a share.
    ///
    /// # Returns
    /// - `Ok(ShareNote)` - The share with its keeps counter incremented
    /// - `Err(ShareError::EmptyId)` - Blank id
    /// - `Err(ShareError::NotFound)` - No live share with that id
    pub async fn keep(&self, id: &str) -> Result<ShareNote, AppError> {
        let id = non_empty(id)?;

        let Some(share) = ShareNoteRepository::new(self.db)
            .increment_keeps(id)
            .await?
        else {
            return Err(ShareError::NotFound.into());
        };

        Ok(share)
    }
}

/// Rejects blank ids. The id itself is passed through untrimmed.
fn non_empty(id: &str) -> Result<&str, ShareError> {
    if id.trim().is_empty() {
        return Err(ShareError::EmptyId);
    }

    Ok(id)
}
