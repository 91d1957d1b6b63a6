use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShareError {
    /// The `id` query parameter or the note's `id` is missing or blank.
    #[error("Empty id")]
    EmptyId,

    /// The request body is missing, unparseable, or has no `data`.
    #[error("Empty data")]
    EmptyData,

    /// The user already has as many live shares as their plan allows.
    #[error("You have exceeded the maximum number of uploads, please upgrade your plan.")]
    QuotaExceeded {
        /// The plan's upload limit that was hit
        limit: u64,
    },

    /// No live share matches, or it belongs to someone else.
    #[error("Something wrong")]
    NotFound,
}

impl ShareError {
    pub fn code(&self) -> u16 {
        match self {
            Self::EmptyId => 403,
            Self::EmptyData => 405,
            Self::QuotaExceeded { .. } => 429,
            Self::NotFound => 404,
        }
    }
}
