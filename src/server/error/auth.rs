use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// Envelope code 401.
    #[error("Unauthorized! Please login")]
    UserNotInSession,

    /// The session points at a user id that no longer exists.
    ///
    /// Envelope code 403 with a generic message.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(String),

    /// CSRF state validation failed during the OAuth callback.
    ///
    /// The state in the callback URL does not match the token stored in the session,
    /// indicating a forged or replayed callback. Envelope code 403.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// The OAuth provider account has no usable email address.
    ///
    /// Envelope code 403.
    #[error("Your GitHub account has no verified email address")]
    MissingEmail,

    /// Exchanging the authorization code for a token failed.
    ///
    /// Envelope code 500; the provider's message is only logged.
    #[error("Failed to exchange OAuth authorization code: {0}")]
    TokenExchange(String),
}

impl AuthError {
    /// Envelope code and message for the client, `None` for internal failures.
    pub fn client_error(&self) -> Option<(u16, String)> {
        match self {
            Self::UserNotInSession => Some((401, self.to_string())),
            Self::UserNotInDatabase(_) => Some((403, "Something wrong".to_string())),
            Self::CsrfValidationFailed => Some((
                403,
                "There was an issue logging you in, please try again.".to_string(),
            )),
            Self::MissingEmail => Some((403, self.to_string())),
            Self::TokenExchange(_) => None,
        }
    }
}
