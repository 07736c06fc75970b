//! Process configuration, read once at startup

use std::env;

use thiserror::Error;

/// Default port the API listens on
const DEFAULT_PORT: u16 = 3030;

/// Default provider API root
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model for the generation endpoints
const DEFAULT_MODEL: &str = "gpt-5.2";

/// Errors raised while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Provider connection settings for the generation endpoints
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

/// Full application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub port: u16,
    /// PostgreSQL connection string
    pub database_url: String,
    /// Provider settings
    pub ai: AiConfig,
}

impl AppConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let api_key = get("AI_INTEGRATIONS_OPENAI_API_KEY")
            .ok_or(ConfigError::Missing("AI_INTEGRATIONS_OPENAI_API_KEY"))?;
        let base_url = get("AI_INTEGRATIONS_OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = get("AI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            port,
            database_url,
            ai: AiConfig {
                api_key,
                base_url,
                model,
            },
        })
    }
}
