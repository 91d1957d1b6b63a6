//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. Every field is cheap to clone: the database connection
//! and `reqwest::Client` share their pools, and the OAuth2 client is plain data.

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

/// OAuth2 client with the authorization and token endpoints configured for GitHub.
pub type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for users, shares and sessions.
    pub db: DatabaseConnection,

    /// HTTP client for the GitHub API. Redirects are disabled.
    pub http_client: reqwest::Client,

    /// OAuth2 client for the GitHub login flow.
    pub oauth_client: OAuth2Client,

    /// Public URL of the web app, target of post-login and logout redirects.
    pub app_url: String,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        app_url: String,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            app_url,
        }
    }
}
