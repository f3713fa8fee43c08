//! Server construction and HTTP routing.
//!
//! One [`Server`] owns one instance of every subsystem; a second server may
//! be constructed in-process for tests without interference.

mod bot_handler;
mod control_handler;
mod responder;
mod validator;

pub use bot_handler::BotHandler;
pub use responder::Responder;
pub use validator::Validator;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;

use crate::config::Config;
use crate::error::MockResult;
use crate::faker::Faker;
use crate::inspector::Recorder;
use crate::scenario::Engine;
use crate::storage::{MemoryStore, Store};
use crate::tokens::{self, Registry, TokenInfo};
use crate::updates::Queue;
use crate::webhook::{self, MethodExecutor};

/// Shared state for both URL families.
pub struct AppState {
    pub tokens: Arc<Registry>,
    pub scenarios: Arc<Engine>,
    pub updates: Arc<Queue>,
    pub recorder: Arc<Recorder>,
    pub webhooks: Arc<webhook::Registry>,
    pub faker: Arc<Faker>,
    pub store: Arc<dyn Store>,
    pub bot: BotHandler,
}

/// The mock server: all subsystems plus routing.
pub struct Server {
    state: Arc<AppState>,
    port: u16,
}

impl Server {
    /// Construct a server from configuration, preloading tokens, per-token
    /// webhooks, and scenarios.
    pub fn new(cfg: &Config) -> Self {
        let tokens_registry = Arc::new(Registry::new());
        let scenarios = Arc::new(Engine::new());
        let updates = Arc::new(Queue::new());
        let recorder = Arc::new(Recorder::new());
        let faker = Arc::new(Faker::new(cfg.server.faker_seed));

        let responder = Arc::new(Responder::new(faker.clone()));
        let executor: Arc<dyn MethodExecutor> = responder.clone();
        let webhooks = Arc::new(webhook::Registry::new(executor));

        for (token, info) in &cfg.tokens {
            tokens_registry.register(
                token,
                TokenInfo {
                    status: info.status,
                    bot_name: info.bot_name.clone(),
                },
            );

            if let Some(hook) = &info.webhook {
                webhooks.set(
                    token,
                    webhook::Config {
                        url: hook.url.clone(),
                        secret_token: hook.secret_token.clone(),
                        ip_address: hook.ip_address.clone(),
                        max_connections: hook.max_connections,
                        allowed_updates: hook.allowed_updates.clone(),
                        ..Default::default()
                    },
                );
            }
        }

        for scenario in &cfg.scenarios {
            scenarios.add(scenario.clone());
        }

        // The registry only gates requests when tokens were preloaded
        let registry_enabled = !cfg.tokens.is_empty();

        // TODO: disk-backed store behind storage.dir; memory covers the
        // current test workloads.
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());

        let bot = BotHandler::new(
            tokens_registry.clone(),
            scenarios.clone(),
            updates.clone(),
            responder,
            recorder.clone(),
            webhooks.clone(),
            registry_enabled,
            cfg.server.strict,
        );

        let state = Arc::new(AppState {
            tokens: tokens_registry,
            scenarios,
            updates,
            recorder,
            webhooks,
            faker,
            store,
            bot,
        });

        Self {
            state,
            port: cfg.server.port,
        }
    }

    /// The axum router with all routes wired. Exposed so in-process tests
    /// can bind it to an ephemeral port.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest("/__control", control_handler::routes())
            .route("/file/:bot_segment/*path", get(file_download_handler))
            .route(
                "/:bot_segment/:method",
                get(bot_handler::handle_bot).post(bot_handler::handle_bot),
            )
            .with_state(self.state.clone())
            .layer(CatchPanicLayer::custom(panic_response))
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// Bind and serve until the process exits.
    pub async fn serve(&self) -> MockResult<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        let app = self.router();

        log::info!("tg-mock listening on http://{}", addr);
        log::info!("  /bot<token>/<method>  - Bot API");
        log::info!("  /__control/*          - control plane");
        log::info!("  /health               - health check");

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// GET /health — plain-text liveness check.
async fn health_handler() -> &'static str {
    "ok"
}

/// GET /file/bot{token}/{path} — serve a stored blob. The terminal segment
/// of the virtual path is the file id.
async fn file_download_handler(
    State(state): State<Arc<AppState>>,
    Path((bot_segment, path)): Path<(String, String)>,
) -> Response {
    let Some(token) = bot_segment.strip_prefix("bot") else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };

    if !tokens::validate_format(token) {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }

    let file_id = path.rsplit('/').next().unwrap_or(path.as_str());
    match state.store.get(file_id) {
        Ok((data, metadata)) => ([(CONTENT_TYPE, metadata.mime_type)], data).into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Top-level panic recovery: any handler panic becomes a 500 envelope.
fn panic_response(err: Box<dyn std::any::Any + Send + 'static>) -> axum::http::Response<axum::body::Body> {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    log::error!("handler panicked: {}", detail);

    let body = json!({
        "ok": false,
        "error_code": 500,
        "description": "Internal Server Error",
    })
    .to_string();

    axum::http::Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body))
        .unwrap()
}
