use thiserror::Error;

use crate::server::model::user::{NICKNAME_MAX_CHARS, NICKNAME_MIN_CHARS};

#[derive(Error, Debug)]
pub enum UserError {
    /// Nickname length is outside the allowed range after trimming.
    #[error("Nickname must be {min}-{max} characters", min = NICKNAME_MIN_CHARS, max = NICKNAME_MAX_CHARS)]
    InvalidNickname,

    /// A user tried to rename an account other than their own.
    #[error("Something wrong")]
    NotOwnAccount,
}

impl UserError {
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidNickname | Self::NotOwnAccount => 403,
        }
    }
}
