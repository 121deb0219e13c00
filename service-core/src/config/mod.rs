use crate::error::AppError;
use config::{Config as Cfg, Environment};
use serde::Deserialize;

pub const DEFAULT_VERSION: &str = "1.0.0";

/// Settings every service reads from the environment.
///
/// Variable names are the lowercased field names (`SERVICE_NAME`, `VERSION`,
/// `PORT`, `LOG_LEVEL`, `OTLP_ENDPOINT`).
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub service_name: String,
    pub version: String,
    pub port: u16,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

/// Per-service fallbacks used when the environment does not say otherwise.
#[derive(Debug, Clone, Copy)]
pub struct ServiceDefaults {
    pub service_name: &'static str,
    pub port: u16,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn load(defaults: ServiceDefaults) -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        Self::from_environment(defaults, Environment::default())
    }

    pub fn from_environment(
        defaults: ServiceDefaults,
        environment: Environment,
    ) -> Result<Self, AppError> {
        let config = Cfg::builder()
            .set_default("service_name", defaults.service_name)?
            .set_default("version", DEFAULT_VERSION)?
            .set_default("port", i64::from(defaults.port))?
            .add_source(environment)
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// OTLP endpoint, ignoring an empty variable.
    pub fn otlp_endpoint(&self) -> Option<&str> {
        self.otlp_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}
