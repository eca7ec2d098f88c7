use crate::server::error::{config::ConfigError, AppError};

pub struct Config {
    pub database_url: String,

    /// Secret gating the admin endpoints (auth check, seed, delete-all).
    pub admin_password: String,

    /// Whether the session cookie carries the `Secure` attribute.
    pub session_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            admin_password: std::env::var("ADMIN_PASSWORD")
                .map_err(|_| ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()))?,
            session_secure: parse_bool_var("SESSION_SECURE")?,
        })
    }
}

/// Reads an optional boolean variable, defaulting to `false` when unset.
fn parse_bool_var(name: &str) -> Result<bool, ConfigError> {
    let Ok(value) = std::env::var(name) else {
        return Ok(false);
    };

    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
