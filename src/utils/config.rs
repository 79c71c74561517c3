use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Unknown STORE_BACKEND: {0} (expected \"mongo\" or \"memory\")")]
    UnknownBackend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
    pub app_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub service_name: String,
    pub backend: StoreBackend,
    pub mongo: MongoConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, applying the
    /// same defaults as `from_env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8000,
        };

        let backend = match get("STORE_BACKEND", "mongo").to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => StoreBackend::Mongo,
            "memory" => StoreBackend::Memory,
            other => return Err(ConfigError::UnknownBackend(other.to_string())),
        };

        Ok(AppConfig {
            host: get("HOST", "localhost"),
            port,
            service_name: get("SERVICE_NAME", "mflix-api"),
            backend,
            mongo: MongoConfig {
                uri: get("MONGODB_URI", "mongodb://localhost:27017"),
                database: get("MONGODB_DATABASE", "sample_mflix"),
                app_name: get("MONGODB_APP_NAME", "mflix_api"),
            },
        })
    }
}
