//! Shared helpers for end-to-end tests.
//!
//! Each test spins up its own server on an ephemeral port and talks to it
//! over real HTTP, so nothing is shared between tests.

#![allow(dead_code)]

use serde_json::Value;
use tg_mock::{Config, Server};

pub const TEST_TOKEN: &str = "123:abc";

/// Bind a server built from `cfg` on an ephemeral port and return its base
/// URL.
pub async fn spawn_server(cfg: Config) -> String {
    let server = Server::new(&cfg);
    let app = server.router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Spawn a server with default configuration.
pub async fn spawn_default() -> String {
    spawn_server(Config::default()).await
}

/// POST a JSON body to a bot-plane method and return (status, body).
pub async fn call_method(base: &str, method: &str, body: Value) -> (u16, Value) {
    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/bot{}/{}", base, TEST_TOKEN, method))
        .header("Content-Type", "application/json")
        .body(body.to_string())
        .send()
        .await
        .unwrap();

    let status = response.status().as_u16();
    let body: Value = response.json().await.unwrap();
    (status, body)
}

/// GET a bot-plane method and return (status, body).
pub async fn get_method(base: &str, method_and_query: &str) -> (u16, Value) {
    let response = reqwest::get(format!("{}/bot{}/{}", base, TEST_TOKEN, method_and_query))
        .await
        .unwrap();

    let status = response.status().as_u16();
    let body: Value = response.json().await.unwrap();
    (status, body)
}
