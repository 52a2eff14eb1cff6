use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Sessions expire after this many days without activity.
    pub session_expiry_days: i64,

    /// When set, CORS is enabled for this single origin.
    pub allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let session_expiry_days = match std::env::var("SESSION_EXPIRY_DAYS") {
            Ok(value) => parse_positive_days(&value)?,
            Err(_) => DEFAULT_SESSION_EXPIRY_DAYS,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            session_expiry_days,
            allowed_origin: std::env::var("ALLOWED_ORIGIN")
                .ok()
                .filter(|origin| !origin.is_empty()),
        })
    }
}

fn parse_positive_days(value: &str) -> Result<i64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "SESSION_EXPIRY_DAYS".to_string(),
        reason,
    };

    let days = value
        .trim()
        .parse::<i64>()
        .map_err(|e| invalid(e.to_string()))?;

    if days < 1 {
        return Err(invalid("must be at least 1".to_string()));
    }

    Ok(days)
}
