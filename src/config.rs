// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    max_connections: u32,
    listen_addr: String,
    operation_timeout: Duration,
    debug: bool,
    allowed_origins: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:9090".into()
}

const fn default_timeout_secs() -> u64 {
    2
}

const fn default_max_connections() -> u32 {
    16
}

fn parse_number<T: std::str::FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a non-negative integer, got {raw:?}")))
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl AppConfig {
    /// Build configuration from environment variables. A `.env` file is
    /// loaded first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(url) => url,
            None => Self::compose_database_url(&lookup)?,
        };

        let max_connections = lookup("DB_MAX_CONNECTIONS")
            .map(|raw| parse_number::<u32>("DB_MAX_CONNECTIONS", &raw))
            .transpose()?
            .unwrap_or_else(default_max_connections);
        if max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DB_MAX_CONNECTIONS must be positive".into(),
            ));
        }

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let timeout_secs = lookup("CONTEXT_TIMEOUT_SECS")
            .map(|raw| parse_number::<u64>("CONTEXT_TIMEOUT_SECS", &raw))
            .transpose()?
            .unwrap_or_else(default_timeout_secs);
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "CONTEXT_TIMEOUT_SECS must be positive".into(),
            ));
        }

        let debug = lookup("DEBUG").is_some_and(|raw| parse_flag(&raw));

        let allowed_origins = lookup("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            database_url,
            max_connections,
            listen_addr,
            operation_timeout: Duration::from_secs(timeout_secs),
            debug,
            allowed_origins,
        })
    }

    fn compose_database_url<F>(lookup: &F) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("DB_HOST").unwrap_or_else(|| "localhost".into());
        let port = lookup("DB_PORT").unwrap_or_else(|| "5432".into());
        parse_number::<u16>("DB_PORT", &port)?;
        let user = lookup("DB_USER").unwrap_or_else(|| "postgres".into());
        let pass = lookup("DB_PASS").unwrap_or_else(|| "postgres".into());
        let name = lookup("DB_NAME").unwrap_or_else(|| "article".into());
        if name.trim().is_empty() {
            return Err(ConfigError::Missing("DB_NAME"));
        }
        Ok(format!("postgres://{user}:{pass}@{host}:{port}/{name}"))
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub const fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Deadline applied to every use-case operation.
    pub const fn operation_timeout(&self) -> Duration {
        self.operation_timeout
    }

    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Allowed CORS origins; empty means any origin.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}
