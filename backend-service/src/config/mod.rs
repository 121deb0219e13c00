use service_core::config::{self as core_config, ServiceDefaults};
use service_core::error::AppError;
use std::env;

pub const DEFAULTS: ServiceDefaults = ServiceDefaults {
    service_name: "backend",
    port: 8080,
};

const DEFAULT_DATABASE_URL: &str = "sqlite:///app.db";

#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub common: core_config::Config,
    /// Reported at startup only; items live in memory.
    pub database_url: String,
}

impl BackendConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load(DEFAULTS)?;

        Ok(BackendConfig {
            common,
            database_url: get_env("DATABASE_URL", DEFAULT_DATABASE_URL),
        })
    }
}

fn get_env(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
