//! Share note domain models and parameters.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::share::ShareNoteDto,
    server::error::{share::ShareError, AppError},
};

/// A published note.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareNote {
    pub id: String,
    pub user_id: String,
    /// Id of the note in the owner's local store.
    pub local_id: String,
    /// JSON-encoded note payload.
    pub data: String,
    pub click: i32,
    pub keeps: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ShareNote {
    /// Converts an entity model to a share domain model at the repository boundary.
    pub fn from_entity(entity: entity::share_note::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            local_id: entity.local_id,
            data: entity.data,
            click: entity.click,
            keeps: entity.keeps,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    pub fn into_dto(self) -> ShareNoteDto {
        ShareNoteDto {
            id: self.id,
            user_id: self.user_id,
            local_id: self.local_id,
            data: self.data,
            click: self.click,
            keeps: self.keeps,
            created_at: self.created_at,
            updated_at: self.updated_at,
            deleted_at: self.deleted_at,
        }
    }
}

/// A validated note ready to be published.
#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload {
    pub local_id: String,
    /// The full note serialized as JSON.
    pub data: String,
}

impl SharePayload {
    /// Validates and serializes a client note.
    ///
    /// The note must be a JSON object with a non-blank string `id`. It is stored
    /// as-is, so nulls, fractional timestamps and unknown fields all survive.
    ///
    /// # Returns
    /// - `Ok(SharePayload)` - Note with a non-blank id
    /// - `Err(AppError::ShareErr(ShareError::EmptyId))` - The note has no usable id
    pub fn from_note(note: Value) -> Result<Self, AppError> {
        let local_id = match note.get("id") {
            Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
            _ => return Err(ShareError::EmptyId.into()),
        };

        Ok(Self {
            local_id,
            data: note.to_string(),
        })
    }
}

/// Parameters for inserting a new share row.
#[derive(Debug, Clone)]
pub struct CreateShareNoteParam {
    pub user_id: String,
    pub local_id: String,
    pub data: String,
}

/// Result of publishing a note: either a fresh share or a refresh of the existing one.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishOutcome {
    Created(ShareNote),
    Updated(ShareNote),
}

impl PublishOutcome {
    /// Envelope message the web client shows in its toast.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Created(_) => "Successed!",
            Self::Updated(_) => "Updated!",
        }
    }

    pub fn into_share(self) -> ShareNote {
        match self {
            Self::Created(share) | Self::Updated(share) => share,
        }
    }
}
