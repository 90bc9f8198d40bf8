use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a port number, got `{value}`")]
    InvalidPort { name: &'static str, value: String },
    #[error("{name} must be true or false, got `{value}`")]
    InvalidFlag { name: &'static str, value: String },
}

/// Server settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub enforce_capacity: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            catalog_path: None,
            enforce_capacity: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidPort {
                name: "PORT",
                value: v,
            })?,
            None => defaults.port,
        };
        let enforce_capacity = match var("ENFORCE_CAPACITY") {
            Some(v) => parse_flag("ENFORCE_CAPACITY", v)?,
            None => defaults.enforce_capacity,
        };

        Ok(Self {
            host: var("HOST").unwrap_or(defaults.host),
            port,
            static_dir: var("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            catalog_path: var("CATALOG_PATH").map(PathBuf::from),
            enforce_capacity,
        })
    }
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}
