//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{model::user::UserDto, server::model::plan::AccountPlan};

/// Minimum nickname length in characters.
pub const NICKNAME_MIN_CHARS: usize = 3;
/// Maximum nickname length in characters.
pub const NICKNAME_MAX_CHARS: usize = 20;

/// Trims a nickname and checks its length in characters.
///
/// Returns the trimmed name when it is within bounds.
pub fn normalize_nickname(name: &str) -> Option<String> {
    let name = name.trim();
    let len = name.chars().count();

    (NICKNAME_MIN_CHARS..=NICKNAME_MAX_CHARS)
        .contains(&len)
        .then(|| name.to_string())
}

/// An Inke account, identified by its email address.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Nickname; unset until the user picks one or the OAuth profile provides one.
    pub name: Option<String>,
    pub image: Option<String>,
    pub plan: AccountPlan,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            image: entity.image,
            plan: AccountPlan::from_stored(&entity.plan),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            image: self.image,
            plan: self.plan.stored(),
        }
    }
}

/// Parameters for creating a user on first login, or touching an existing one.
///
/// `name` and `image` are only written when the row is inserted; a returning user keeps
/// the nickname they chose.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
}

/// Parameters for renaming a user.
#[derive(Debug, Clone)]
pub struct UpdateNicknameParam {
    /// Id the client claims to rename; must be the session user.
    pub user_id: String,
    pub name: String,
}
