// Application configuration loaded once at startup
// All values are read from the environment (optionally via a .env file) and
// frozen for the lifetime of the process.

use jsonwebtoken::Algorithm;
use std::str::FromStr;

/// Errors raised while loading configuration at startup
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("unsupported signing algorithm: {0}")]
    InvalidAlgorithm(String),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Immutable process configuration
///
/// Constructed once in `main` and passed explicitly to the components that
/// need it (token service, router CORS layer). Never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub secret_key: String,
    pub algorithm: Algorithm,
    pub access_token_expire_minutes: i64,
    pub cors_origins: Vec<String>,
    pub host: String,
    pub port: String,
}

const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:4200,http://localhost:4201,http://127.0.0.1:4200,http://127.0.0.1:4201";

impl Config {
    /// Load configuration from the environment
    ///
    /// `DATABASE_URL` and `SECRET_KEY` are required; everything else has a
    /// development-friendly default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let secret_key =
            std::env::var("SECRET_KEY").map_err(|_| ConfigError::MissingVar("SECRET_KEY"))?;

        let algorithm_name =
            std::env::var("ALGORITHM").unwrap_or_else(|_| "HS256".to_string());
        let algorithm = Algorithm::from_str(&algorithm_name)
            .map_err(|_| ConfigError::InvalidAlgorithm(algorithm_name))?;

        let expire_raw = std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "1440".to_string());
        let access_token_expire_minutes =
            expire_raw
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "ACCESS_TOKEN_EXPIRE_MINUTES",
                    value: expire_raw,
                })?;

        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());

        Ok(Self {
            database_url,
            secret_key,
            algorithm,
            access_token_expire_minutes,
            cors_origins,
            host,
            port,
        })
    }
}
