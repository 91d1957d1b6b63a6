use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check
    /// `.env.example` for the full list.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A URL-valued setting could not be parsed.
    #[error("Invalid URL in {name}: {source}")]
    InvalidUrl {
        /// Name of the environment variable holding the URL
        name: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },

    /// `APP_URL` cannot be used as a CORS origin header.
    #[error("APP_URL '{0}' is not a valid origin")]
    InvalidOrigin(String),
}
