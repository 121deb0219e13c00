//! HTTP client for the backend items API.

use crate::config::BackendApiSettings;
use reqwest::Client;
use serde_json::Value;
use service_core::observability::TracedClientExt;

pub struct BackendClient {
    client: Client,
    settings: BackendApiSettings,
}

impl BackendClient {
    pub fn new(settings: BackendApiSettings) -> Self {
        Self {
            client: Client::new(),
            settings,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.settings.url
    }

    /// `GET /api/items` on the backend, single attempt, bounded by the
    /// configured timeout.
    ///
    /// Non-2xx statuses and undecodable bodies are errors, same as network
    /// failures. Trace context and the caller's request id are forwarded.
    pub async fn list_items(&self, request_id: Option<&str>) -> Result<Value, reqwest::Error> {
        let url = format!("{}/api/items", self.settings.url);

        let response = self
            .client
            .traced_get(&url)
            .timeout(self.settings.timeout)
            .send_with_request_id(request_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to send GET request to {}: {}", url, e);
                e
            })?;

        response.error_for_status()?.json::<Value>().await
    }
}
