use axum::http::{header, HeaderValue, Method};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

const DEFAULT_LOG_FILTER: &str = "inke=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// Honors `RUST_LOG` and falls back to `inke=info,tower_http=info`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after 7 days of inactivity. Cookies are marked secure when the app
/// is served over https.
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| sea_orm::DbErr::Custom(format!("Failed to migrate session store: {}", e)))?;

    let layer = SessionManagerLayer::new(session_store)
        .with_secure(config.app_url.starts_with("https://"))
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(layer)
}

/// Builds the HTTP client used for GitHub API calls.
///
/// Redirect following is disabled to prevent SSRF through crafted responses.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!("inke/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client for GitHub login.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with auth, token and redirect URLs set
/// - `Err(AppError::ConfigErr(InvalidUrl))` - One of the configured URLs is malformed
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let invalid = |name: &str| {
        let name = name.to_string();
        move |source| ConfigError::InvalidUrl { name, source }
    };

    let client = BasicClient::new(ClientId::new(config.github_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.github_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(config.github_auth_url.clone()).map_err(invalid("GITHUB_AUTH_URL"))?,
        )
        .set_token_uri(
            TokenUrl::new(config.github_token_url.clone()).map_err(invalid("GITHUB_TOKEN_URL"))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(config.github_redirect_url.clone())
                .map_err(invalid("GITHUB_REDIRECT_URL"))?,
        );

    Ok(client)
}

/// Allows the web app origin to call the API with its session cookie.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(&config.app_url)
        .map_err(|_| ConfigError::InvalidOrigin(config.app_url.clone()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true))
}
