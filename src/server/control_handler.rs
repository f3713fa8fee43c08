//! Control-plane endpoints under `/__control/*`.
//!
//! Test harnesses drive these to queue scenarios, manage tokens and
//! webhooks, inject updates, trigger deliveries, and read back recorded
//! traffic.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::scenario::Scenario;
use crate::server::AppState;
use crate::tokens::{Status, TokenInfo};
use crate::webhook;

/// Routes mounted under `/__control`.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/scenarios",
            get(list_scenarios).post(add_scenario).delete(clear_scenarios),
        )
        .route("/scenarios/:id", delete(remove_scenario))
        .route("/tokens", get(list_tokens).post(register_token))
        .route("/tokens/:token", delete(delete_token).patch(update_token))
        .route("/updates", get(list_updates).post(add_update).delete(clear_updates))
        .route("/requests", get(list_requests).delete(clear_requests))
        .route(
            "/webhooks",
            get(list_webhooks).post(set_webhook).delete(clear_webhooks),
        )
        .route("/webhooks/:token", delete(delete_webhook))
        .route("/webhooks/:token/deliver", post(deliver_webhook))
        .route("/reset", post(reset))
        .route("/state", get(get_state))
}

// Scenarios

async fn list_scenarios(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({"scenarios": state.scenarios.list()}))
}

async fn add_scenario(State(state): State<Arc<AppState>>, Json(scenario): Json<Scenario>) -> Response {
    let id = state.scenarios.add(scenario);
    log::debug!("scenario added: {}", id);
    (StatusCode::CREATED, Json(json!({"id": id}))).into_response()
}

async fn clear_scenarios(State(state): State<Arc<AppState>>) -> StatusCode {
    state.scenarios.clear();
    StatusCode::NO_CONTENT
}

async fn remove_scenario(State(state): State<Arc<AppState>>, Path(id): Path<String>) -> Response {
    if state.scenarios.remove(&id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::NOT_FOUND, "scenario not found").into_response()
    }
}

// Tokens

#[derive(Deserialize)]
struct RegisterTokenRequest {
    token: String,
    #[serde(default)]
    status: Status,
    #[serde(default)]
    bot_name: String,
}

async fn list_tokens(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({"tokens": state.tokens.list()}))
}

async fn register_token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterTokenRequest>,
) -> StatusCode {
    state.tokens.register(
        &req.token,
        TokenInfo {
            status: req.status,
            bot_name: req.bot_name,
        },
    );
    StatusCode::CREATED
}

async fn delete_token(State(state): State<Arc<AppState>>, Path(token): Path<String>) -> StatusCode {
    state.tokens.delete(&token);
    StatusCode::NO_CONTENT
}

#[derive(Deserialize)]
struct UpdateTokenRequest {
    status: Status,
}

async fn update_token(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    Json(req): Json<UpdateTokenRequest>,
) -> Response {
    if state.tokens.update_status(&token, req.status) {
        StatusCode::OK.into_response()
    } else {
        (StatusCode::NOT_FOUND, "token not found").into_response()
    }
}

// Updates

async fn list_updates(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "updates": state.updates.get(0, 100),
        "pending": state.updates.pending(),
    }))
}

async fn add_update(
    State(state): State<Arc<AppState>>,
    Json(update): Json<Map<String, Value>>,
) -> Response {
    let id = state.updates.add(update);
    (StatusCode::CREATED, Json(json!({"update_id": id}))).into_response()
}

async fn clear_updates(State(state): State<Arc<AppState>>) -> StatusCode {
    state.updates.clear();
    StatusCode::NO_CONTENT
}

// Requests

#[derive(Deserialize)]
struct ListRequestsQuery {
    method: Option<String>,
    token: Option<String>,
    limit: Option<usize>,
}

async fn list_requests(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListRequestsQuery>,
) -> Json<Value> {
    // Empty filter values mean "no filter"
    let method = query.method.as_deref().filter(|m| !m.is_empty());
    let token = query.token.as_deref().filter(|t| !t.is_empty());
    let requests = state.recorder.list(method, token, query.limit.unwrap_or(100));
    Json(json!({
        "requests": requests,
        "count": state.recorder.count(),
    }))
}

async fn clear_requests(State(state): State<Arc<AppState>>) -> StatusCode {
    state.recorder.clear();
    StatusCode::NO_CONTENT
}

// Webhooks

#[derive(Deserialize)]
struct SetWebhookRequest {
    token: String,
    url: String,
    #[serde(default)]
    secret_token: Option<String>,
    #[serde(default)]
    ip_address: Option<String>,
    #[serde(default)]
    max_connections: Option<u32>,
    #[serde(default)]
    allowed_updates: Vec<String>,
}

async fn list_webhooks(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({"webhooks": state.webhooks.list()}))
}

async fn set_webhook(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetWebhookRequest>,
) -> StatusCode {
    state.webhooks.set(
        &req.token,
        webhook::Config {
            url: req.url,
            secret_token: req.secret_token,
            ip_address: req.ip_address,
            max_connections: req.max_connections,
            allowed_updates: req.allowed_updates,
            ..Default::default()
        },
    );
    StatusCode::CREATED
}

async fn delete_webhook(State(state): State<Arc<AppState>>, Path(token): Path<String>) -> StatusCode {
    state.webhooks.delete(&token);
    StatusCode::NO_CONTENT
}

async fn clear_webhooks(State(state): State<Arc<AppState>>) -> StatusCode {
    state.webhooks.clear();
    StatusCode::NO_CONTENT
}

/// Deliver the request body as an update to the webhook registered for the
/// token, returning the full delivery result (including any method executed
/// from the response body).
async fn deliver_webhook(
    State(state): State<Arc<AppState>>,
    Path(token): Path<String>,
    Json(update): Json<Map<String, Value>>,
) -> Json<webhook::DeliveryResult> {
    let result = state.webhooks.deliver(&token, &update).await;
    Json(result)
}

// State

async fn reset(State(state): State<Arc<AppState>>) -> StatusCode {
    state.scenarios.clear();
    state.updates.clear();
    state.recorder.clear();
    StatusCode::NO_CONTENT
}

async fn get_state(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "scenarios_count": state.scenarios.count(),
        "updates_pending": state.updates.pending(),
        "requests_recorded": state.recorder.count(),
    }))
}
