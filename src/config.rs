use std::{str::FromStr, time::Duration};

use crate::error::{config::ConfigError, Error};

/// Process-wide configuration, loaded once at startup.
///
/// `DATABASE_URL` and `JWT_SECRET` are hard requirements: there is
/// deliberately no fallback signing secret, so a missing `JWT_SECRET` fails
/// startup instead of silently signing tokens with a well-known value.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub rate_limit_window_secs: u64,
    pub rate_limit_max_requests: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            jwt_secret: require("JWT_SECRET")?,
            port: parse_or("PORT", 5000)?,
            allowed_origins: origins_from_env(),
            rate_limit_window_secs: parse_or("RATE_LIMIT_WINDOW_SECS", 900)?,
            rate_limit_max_requests: parse_or("RATE_LIMIT_MAX_REQUESTS", 100)?,
        })
    }

    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }
}

fn require(var: &str) -> Result<String, Error> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()).into())
}

fn parse_or<T: FromStr>(var: &str, default: T) -> Result<T, Error> {
    match std::env::var(var) {
        Ok(raw) => match raw.parse() {
            Ok(value) => Ok(value),
            Err(_) => Err(ConfigError::InvalidEnvValue {
                var: var.to_string(),
                raw,
            }
            .into()),
        },
        Err(_) => Ok(default),
    }
}

fn origins_from_env() -> Vec<String> {
    match std::env::var("ALLOWED_ORIGINS") {
        Ok(raw) => raw
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect(),
        Err(_) => vec!["http://localhost:3003".to_string()],
    }
}
