use std::env::var;
use std::time::Duration;

use dotenvy::dotenv;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required env param {0}")]
    Missing(&'static str),
    #[error("invalid value for env param {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

pub struct Config {
    pub port: u16,
    pub scheme: String,
    pub host: String,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expiration: Duration,
    pub log_level: String,
    pub admin: Option<AdminBootstrap>,
}

pub struct AdminBootstrap {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl Config {
    pub fn try_parse() -> Result<Config, ConfigError> {
        let _ = dotenv();

        let admin = match (optional("ADMIN_EMAIL"), optional("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap {
                name: optional("ADMIN_NAME").unwrap_or_else(|| "Administrator".to_string()),
                email,
                password,
            }),
            _ => None,
        };

        Ok(Config {
            port: parsed("PORT", 8080)?,
            scheme: optional("SCHEME").unwrap_or_else(|| "http".to_string()),
            host: optional("HOST").unwrap_or_else(|| "localhost".to_string()),
            database_url: optional("DATABASE_URL"),
            database_max_connections: parsed("DATABASE_MAX_CONNECTIONS", 5)?,
            jwt_secret: optional("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?,
            jwt_expiration: Duration::from_secs(parsed("JWT_EXPIRATION_SECS", 86_400)?),
            log_level: optional("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            admin,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

fn optional(name: &'static str) -> Option<String> {
    var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parsed<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
