pub mod config;
pub mod handlers;
pub mod services;
pub mod startup;

use config::FrontendConfig;
use services::BackendClient;
use std::sync::Arc;

/// Shared application state containing configuration and the backend client
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<FrontendConfig>,
    pub backend_client: Arc<BackendClient>,
}

impl AppState {
    pub fn new(config: FrontendConfig) -> Self {
        let backend_client = Arc::new(BackendClient::new(config.backend.clone()));
        Self {
            config: Arc::new(config),
            backend_client,
        }
    }
}
