#![allow(dead_code)]

use frontend_service::config::{BackendApiSettings, FrontendConfig};
use frontend_service::startup::Application;
use service_core::config::{Config as CoreConfig, DEFAULT_VERSION};
use std::time::Duration;

pub const TEST_SERVICE_NAME: &str = "frontend-test";

fn core_config(service_name: &str) -> CoreConfig {
    CoreConfig {
        service_name: service_name.to_string(),
        version: DEFAULT_VERSION.to_string(),
        port: 0, // Random port for testing
        log_level: "info".to_string(),
        otlp_endpoint: None,
    }
}

pub fn test_config(backend_url: &str, timeout: Duration) -> FrontendConfig {
    FrontendConfig {
        common: core_config(TEST_SERVICE_NAME),
        backend: BackendApiSettings::new(backend_url, timeout),
    }
}

async fn wait_until_up(client: &reqwest::Client, address: &str) {
    let health_url = format!("{}/health", address);
    for _ in 0..50 {
        if client.get(&health_url).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}

/// Start a real backend-service on a random port and return its base URL.
pub async fn spawn_backend() -> String {
    let config = backend_service::config::BackendConfig {
        common: core_config("backend-test"),
        database_url: "sqlite:///test.db".to_string(),
    };
    let app = backend_service::startup::Application::build(config)
        .await
        .expect("Failed to build backend");
    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    wait_until_up(&reqwest::Client::new(), &address).await;
    address
}

/// Base URL nothing is listening on.
pub async fn unreachable_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port finder");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

/// Backend stand-in that answers `/api/items` with the given status and body
/// after `delay`.
pub async fn spawn_stub_backend(status: u16, body: &'static str, delay: Duration) -> String {
    use axum::{http::StatusCode, routing::get, Router};

    let status = StatusCode::from_u16(status).expect("valid status");
    let router = Router::new().route(
        "/api/items",
        get(move || async move {
            tokio::time::sleep(delay).await;
            (status, [("content-type", "application/json")], body)
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let address = format!("http://127.0.0.1:{}", listener.local_addr().unwrap().port());

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    address
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn(backend_url: &str) -> Self {
        Self::spawn_with_timeout(backend_url, Duration::from_secs(5)).await
    }

    pub async fn spawn_with_timeout(backend_url: &str, timeout: Duration) -> Self {
        let app = Application::build(test_config(backend_url, timeout))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();
        wait_until_up(&client, &address).await;

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
