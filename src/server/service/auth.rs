//! OAuth2 login with GitHub.

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields, Scope,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{normalize_nickname, UpsertUserParam, User},
    state::OAuth2Client,
};

const GITHUB_API_URL: &str = "https://api.github.com";

/// Profile returned by `GET /user`.
#[derive(Debug, Deserialize)]
struct GithubUser {
    login: String,
    name: Option<String>,
    email: Option<String>,
    avatar_url: Option<String>,
}

/// Entry returned by `GET /user/emails`.
#[derive(Debug, Deserialize)]
struct GithubEmail {
    email: String,
    primary: bool,
    verified: bool,
}

pub struct GithubAuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
}

impl<'a> GithubAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Builds the GitHub authorize URL and the CSRF state it carries.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        self.oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("read:user".to_string()))
            .add_scope(Scope::new("user:email".to_string()))
            .url()
    }

    /// Completes the login: exchanges the code, reads the GitHub profile and upserts the
    /// matching Inke user by email.
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user
    /// - `Err(AuthError::TokenExchange)` - GitHub rejected the authorization code
    /// - `Err(AuthError::MissingEmail)` - The GitHub account has no usable email
    /// - `Err(AppError::ReqwestErr)` - GitHub API request failed
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchange(e.to_string()))?;

        let profile = self.fetch_github_user(&token).await?;

        let email = match profile.email.clone() {
            Some(email) => email,
            None => self.fetch_primary_email(&token).await?,
        };

        let name = profile
            .name
            .as_deref()
            .and_then(normalize_nickname)
            .or_else(|| normalize_nickname(&profile.login));

        let user_repo = UserRepository::new(self.db);
        let is_new = user_repo.find_by_email(&email).await?.is_none();

        let user = user_repo
            .upsert(UpsertUserParam {
                email,
                name,
                image: profile.avatar_url,
            })
            .await?;

        if is_new {
            tracing::info!(user_id = %user.id, "Registered new user from GitHub");
        } else {
            tracing::info!(user_id = %user.id, "User logged in with GitHub");
        }

        Ok(user)
    }

    async fn fetch_github_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<GithubUser, AppError> {
        let user = self
            .http_client
            .get(format!("{}/user", GITHUB_API_URL))
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<GithubUser>()
            .await?;

        Ok(user)
    }

    /// Falls back to the account's verified primary email when the profile hides it.
    async fn fetch_primary_email(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<String, AppError> {
        let emails = self
            .http_client
            .get(format!("{}/user/emails", GITHUB_API_URL))
            .bearer_auth(token.access_token().secret())
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<GithubEmail>>()
            .await?;

        let email = emails
            .into_iter()
            .find(|e| e.primary && e.verified)
            .map(|e| e.email)
            .ok_or(AuthError::MissingEmail)?;

        Ok(email)
    }
}
