use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::user::adapter::outgoing::jwt::JwtConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Named configuration values. Any `Fn(&str) -> Option<String>` works, so
/// tests can feed a map instead of the process environment.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.get(key)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(key))
    }

    fn parse_or<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }),
        }
    }
}

impl<F> ConfigSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Loads `.env.{RUST_ENV}` when present, otherwise `.env`.
pub fn load_dotenv() -> String {
    let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", environment);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    environment
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub app_name: String,
    pub environment: String,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn load(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        Ok(Self {
            host: source.required("HOST")?,
            port: source.parse_or("PORT", 8080)?,
            app_name: source
                .get("APP_NAME")
                .unwrap_or_else(|| "user-service".to_string()),
            environment: source
                .get("RUST_ENV")
                .unwrap_or_else(|| "development".to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
}

impl DatabaseConfig {
    fn load(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let max_connections = source.parse_or("DB_MAX_CONNECTIONS", 50u32)?;
        let min_connections = source.parse_or("DB_MIN_CONNECTIONS", 10u32)?;

        if min_connections > max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                reason: format!("must not exceed DB_MAX_CONNECTIONS ({max_connections})"),
            });
        }

        Ok(Self {
            url: source.required("DATABASE_URL")?,
            max_connections,
            min_connections,
            connect_timeout: Duration::from_secs(source.parse_or("DB_CONNECT_TIMEOUT_SECS", 5)?),
            idle_timeout: Duration::from_secs(source.parse_or("DB_IDLE_TIMEOUT_SECS", 300)?),
            max_lifetime: Duration::from_secs(source.parse_or("DB_MAX_LIFETIME_SECS", 1800)?),
        })
    }
}

#[derive(Debug, Clone)]
pub struct HasherConfig {
    pub bcrypt_cost: u32,
}

impl HasherConfig {
    fn load(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        let bcrypt_cost = source.parse_or("BCRYPT_COST", bcrypt::DEFAULT_COST)?;

        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::Invalid {
                key: "BCRYPT_COST",
                reason: format!("{bcrypt_cost} is outside 4..=31"),
            });
        }

        Ok(Self { bcrypt_cost })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub hasher: HasherConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&|key: &str| env::var(key).ok())
    }

    pub fn from_source(source: &impl ConfigSource) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::load(source)?,
            database: DatabaseConfig::load(source)?,
            jwt: JwtConfig::from_source(source)?,
            hasher: HasherConfig::load(source)?,
        })
    }
}
