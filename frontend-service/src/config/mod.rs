use service_core::config::{self as core_config, ServiceDefaults};
use service_core::error::AppError;
use std::env;
use std::time::Duration;

pub const DEFAULTS: ServiceDefaults = ServiceDefaults {
    service_name: "frontend",
    port: 5000,
};

const DEFAULT_BACKEND_API_URL: &str = "http://backend-service:8080";
const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub common: core_config::Config,
    pub backend: BackendApiSettings,
}

#[derive(Debug, Clone)]
pub struct BackendApiSettings {
    /// Base URL of the backend service, without a trailing slash.
    pub url: String,
    /// Upper bound for a single backend call.
    pub timeout: Duration,
}

impl BackendApiSettings {
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

impl FrontendConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load(DEFAULTS)?;

        let timeout = backend_timeout(get_env("BACKEND_TIMEOUT_SECS"))?;
        let url = get_env("BACKEND_API_URL").unwrap_or_else(|| DEFAULT_BACKEND_API_URL.to_string());

        Ok(FrontendConfig {
            common,
            backend: BackendApiSettings::new(&url, timeout),
        })
    }
}

/// Unset and empty variables are treated the same.
fn get_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn backend_timeout(raw: Option<String>) -> Result<Duration, AppError> {
    let secs = match raw {
        Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "BACKEND_TIMEOUT_SECS must be a whole number of seconds: {}",
                e
            ))
        })?,
        None => DEFAULT_BACKEND_TIMEOUT_SECS,
    };
    Ok(Duration::from_secs(secs))
}
