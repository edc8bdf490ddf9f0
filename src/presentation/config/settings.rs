use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;

use crate::domain::{Backend, DEFAULT_BACKEND};
use crate::infrastructure::sentiment::DEFAULT_SENTIMENT_MODEL;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub sentiment: SentimentSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SentimentSettings {
    /// `vader` or `transformers`.
    pub backend: String,
    /// Hub repository id or local directory of the classifier checkpoint.
    pub model: String,
    /// Initialize the predictor at startup instead of on the first request.
    pub preload: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Settings {
    /// Defaults, then `appsettings.{environment}`, then `APP__SECTION__KEY`
    /// variables, then the short variables `SENTIMENT_BACKEND`,
    /// `HF_SENTIMENT_MODEL`, `SERVER_PORT` and `LOG_FORMAT`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder(environment)?
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_override_option("sentiment.backend", std::env::var("SENTIMENT_BACKEND").ok())?
            .set_override_option("sentiment.model", std::env::var("HF_SENTIMENT_MODEL").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option(
                "logging.json",
                std::env::var("LOG_FORMAT")
                    .ok()
                    .map(|format| format.eq_ignore_ascii_case("json")),
            )?
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults plus the optional per-environment file.
    pub fn builder(
        environment: Environment,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000_i64)?
            .set_default("sentiment.backend", DEFAULT_BACKEND)?
            .set_default("sentiment.model", DEFAULT_SENTIMENT_MODEL)?
            .set_default("sentiment.preload", false)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            ))
    }

    pub fn backend(&self) -> Backend {
        Backend::parse(&self.sentiment.backend)
    }
}
