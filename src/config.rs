//! Process configuration read from the environment (and `.env`).

use std::env;
use std::path::PathBuf;

use crate::storage::NamingStrategy;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub font_dir: PathBuf,
    pub asset_dir: PathBuf,
    pub upload_naming: NamingStrategy,
    /// Empty means any origin is allowed.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            upload_dir: PathBuf::from("./uploads"),
            font_dir: PathBuf::from("./fonts"),
            asset_dir: PathBuf::from("./static"),
            upload_naming: NamingStrategy::Timestamp,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: port.clone() })?;
        }
        if let Some(dir) = lookup("UPLOAD_DIR") {
            config.upload_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("FONT_DIR") {
            config.font_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("ASSET_DIR") {
            config.asset_dir = PathBuf::from(dir);
        }
        if let Some(naming) = lookup("UPLOAD_NAMING") {
            config.upload_naming = match naming.trim().to_ascii_lowercase().as_str() {
                "timestamp" => NamingStrategy::Timestamp,
                "random" => NamingStrategy::Random,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "UPLOAD_NAMING",
                        value: naming,
                    })
                }
            };
        }
        if let Some(origins) = lookup("CORS_ALLOWED_ORIGINS") {
            config.cors_allowed_origins = origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        Ok(config)
    }
}
