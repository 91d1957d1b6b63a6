use crate::server::error::{config::ConfigError, AppError};

const GITHUB_AUTH_URL: &str = "https://github.com/login/oauth/authorize";
const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:3000";

pub struct Config {
    pub database_url: String,

    pub github_client_id: String,
    pub github_client_secret: String,
    pub github_redirect_url: String,

    pub github_auth_url: String,
    pub github_token_url: String,

    /// Public URL of the web app; used for CORS and post-login redirects.
    pub app_url: String,
    pub server_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key).ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        Ok(Self {
            database_url: require("DATABASE_URL")?,
            github_client_id: require("GITHUB_CLIENT_ID")?,
            github_client_secret: require("GITHUB_CLIENT_SECRET")?,
            github_redirect_url: require("GITHUB_REDIRECT_URL")?,
            github_auth_url: GITHUB_AUTH_URL.to_string(),
            github_token_url: GITHUB_TOKEN_URL.to_string(),
            app_url: require("APP_URL")?.trim_end_matches('/').to_string(),
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string()),
        })
    }
}
