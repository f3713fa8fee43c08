//! The bot-plane request pipeline.
//!
//! Order per request: token checks, webhook-method interception, method
//! lookup, parameter parsing, header scenario, queued scenario, getUpdates
//! handling, validation, response synthesis. Every outcome, error paths
//! included, is recorded by the inspector.

use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::{json, Map, Value};

use crate::faker::{param_i64, param_str};
use crate::inspector::{Recorder, RequestRecord};
use crate::scenario::{builtin_error, Engine, ErrorResponse};
use crate::server::responder::Responder;
use crate::server::validator::Validator;
use crate::server::AppState;
use crate::tokens::{self, Status};
use crate::updates::Queue;
use crate::webhook;

/// Handles `/bot{token}/{method}` requests.
pub struct BotHandler {
    registry: Arc<tokens::Registry>,
    registry_enabled: bool,
    scenarios: Arc<Engine>,
    updates: Arc<Queue>,
    validator: Validator,
    responder: Arc<Responder>,
    recorder: Arc<Recorder>,
    webhooks: Arc<webhook::Registry>,
}

/// Axum entry point for the bot plane. The first path segment carries the
/// `bot` prefix glued to the token, so it is split off here.
pub async fn handle_bot(
    State(state): State<Arc<AppState>>,
    Path((bot_segment, method)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(token) = bot_segment.strip_prefix("bot") else {
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };

    state.bot.handle(token, &method, &headers, &query, &body).await
}

fn error_envelope(code: u16, description: &str) -> Value {
    json!({"ok": false, "error_code": code, "description": description})
}

fn scenario_envelope(response: &ErrorResponse) -> Value {
    let mut envelope = error_envelope(response.error_code, &response.description);
    if let Some(retry_after) = response.retry_after {
        envelope["parameters"] = json!({"retry_after": retry_after});
    }
    envelope
}

fn success_envelope(result: Value) -> Value {
    json!({"ok": true, "result": result})
}

fn json_response(status: u16, body: &Value) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, [(CONTENT_TYPE, "application/json")], body.to_string()).into_response()
}

fn param_bool(params: &Map<String, Value>, key: &str) -> bool {
    match params.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s == "true",
        _ => false,
    }
}

impl BotHandler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        registry: Arc<tokens::Registry>,
        scenarios: Arc<Engine>,
        updates: Arc<Queue>,
        responder: Arc<Responder>,
        recorder: Arc<Recorder>,
        webhooks: Arc<webhook::Registry>,
        registry_enabled: bool,
        strict: bool,
    ) -> Self {
        Self {
            registry,
            registry_enabled,
            scenarios,
            updates,
            validator: Validator::new(strict),
            responder,
            recorder,
            webhooks,
        }
    }

    pub async fn handle(
        &self,
        token: &str,
        method: &str,
        headers: &HeaderMap,
        query: &HashMap<String, String>,
        body: &[u8],
    ) -> Response {
        log::debug!("bot request: {} (token {})", method, token);

        // Token format and registry policy
        if !tokens::validate_format(token) {
            return self.reject(token, method, 401, "Unauthorized: invalid token format");
        }
        if self.registry_enabled {
            match self.registry.get(token) {
                None => {
                    return self.reject(token, method, 401, "Unauthorized: token not registered");
                }
                Some(info) => match info.status {
                    Status::Banned => {
                        return self.reject(token, method, 403, "Forbidden: bot was banned");
                    }
                    Status::Deactivated => {
                        return self.reject(token, method, 401, "Unauthorized: bot was deactivated");
                    }
                    Status::Active => {}
                },
            }
        }

        // Webhook management methods bypass the spec table
        match method {
            "setWebhook" => {
                let params = self.parse_params_or_empty(headers, query, body);
                return self.handle_set_webhook(token, params);
            }
            "deleteWebhook" => {
                let params = self.parse_params_or_empty(headers, query, body);
                return self.handle_delete_webhook(token, params);
            }
            "getWebhookInfo" => {
                return self.handle_get_webhook_info(token);
            }
            _ => {}
        }

        let Some(spec) = crate::gen::method_spec(method) else {
            return self.reject(token, method, 404, "Not Found: method not found");
        };

        let params = match self.parse_params(headers, query, body) {
            Ok(params) => params,
            Err(reason) => {
                let description = format!("Bad Request: {}", reason);
                return self.reject(token, method, 400, &description);
            }
        };

        // Header-triggered built-in error
        if let Some(name) = headers.get("X-TG-Mock-Scenario").and_then(|v| v.to_str().ok()) {
            if let Some(response) = self.header_scenario(headers, name) {
                let envelope = scenario_envelope(&response);
                self.record(
                    token,
                    method,
                    Some(params),
                    format!("header:{}", name),
                    envelope.clone(),
                    true,
                    response.error_code,
                );
                return json_response(response.error_code, &envelope);
            }
        }

        // Queued scenario: an error rule answers immediately, a success rule
        // contributes overrides to the generated result. A find can race
        // another request past a bounded rule's budget; losing the race
        // means rescanning, so at most `times` requests observe the rule.
        let mut scenario_id = String::new();
        let mut overrides: Option<Map<String, Value>> = None;
        let mut matched = None;
        while let Some(scenario) = self.scenarios.find(method, &params) {
            if scenario.consume() {
                matched = Some(scenario);
                break;
            }
        }
        if let Some(scenario) = matched {
            scenario_id = scenario.id.clone();
            if let Some(response) = &scenario.response {
                let envelope = scenario_envelope(response);
                self.record(
                    token,
                    method,
                    Some(params),
                    scenario_id,
                    envelope.clone(),
                    true,
                    response.error_code,
                );
                return json_response(response.error_code, &envelope);
            }
            overrides = scenario.response_data.clone();
        }

        if method == "getUpdates" {
            return self.handle_get_updates(token, params, scenario_id);
        }

        if let Err(reason) = self.validator.validate(spec, &params) {
            let description = format!("Bad Request: {}", reason);
            let envelope = error_envelope(400, &description);
            self.record(token, method, Some(params), scenario_id, envelope.clone(), true, 400);
            return json_response(400, &envelope);
        }

        let result = self
            .responder
            .generate_with_overrides(spec, &params, overrides.as_ref());
        let envelope = success_envelope(result);
        self.record(token, method, Some(params), scenario_id, envelope.clone(), false, 200);
        json_response(200, &envelope)
    }

    /// Emit and record a pipeline rejection that carries no parsed params.
    fn reject(&self, token: &str, method: &str, code: u16, description: &str) -> Response {
        let envelope = error_envelope(code, description);
        self.record(token, method, None, String::new(), envelope.clone(), true, code);
        json_response(code, &envelope)
    }

    fn record(
        &self,
        token: &str,
        method: &str,
        params: Option<Map<String, Value>>,
        scenario_id: String,
        response: Value,
        is_error: bool,
        status_code: u16,
    ) {
        self.recorder.record(RequestRecord::new(
            token,
            method,
            params,
            scenario_id,
            response,
            is_error,
            status_code,
        ));
    }

    /// Union of query parameters, JSON body, and form fields.
    fn parse_params(
        &self,
        headers: &HeaderMap,
        query: &HashMap<String, String>,
        body: &[u8],
    ) -> Result<Map<String, Value>, String> {
        let mut params = Map::new();

        for (key, value) in query {
            params.insert(key.clone(), Value::from(value.clone()));
        }

        if body.is_empty() {
            return Ok(params);
        }

        let content_type = headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
            .unwrap_or_default();

        match content_type.as_str() {
            "application/json" | "" => {
                let parsed: Value = serde_json::from_slice(body).map_err(|e| e.to_string())?;
                match parsed {
                    Value::Object(map) => params.extend(map),
                    _ => return Err("body is not a JSON object".to_string()),
                }
            }
            "application/x-www-form-urlencoded" => {
                for (key, value) in url::form_urlencoded::parse(body) {
                    params.insert(key.into_owned(), Value::from(value.into_owned()));
                }
            }
            // multipart and anything else: accepted, parameters ignored
            _ => {}
        }

        Ok(params)
    }

    fn parse_params_or_empty(
        &self,
        headers: &HeaderMap,
        query: &HashMap<String, String>,
        body: &[u8],
    ) -> Map<String, Value> {
        self.parse_params(headers, query, body).unwrap_or_default()
    }

    /// Resolve a header-triggered built-in error, applying the optional
    /// retry-after override. Unknown names are ignored by the caller.
    fn header_scenario(&self, headers: &HeaderMap, name: &str) -> Option<ErrorResponse> {
        let mut response = builtin_error(name)?.clone();

        if let Some(retry_after) = headers
            .get("X-TG-Mock-Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u32>().ok())
        {
            response.retry_after = Some(retry_after);
        }

        Some(response)
    }

    /// The long-polling half of update transport. Passing an offset
    /// acknowledges everything below it first; an active webhook makes the
    /// call conflict.
    fn handle_get_updates(
        &self,
        token: &str,
        params: Map<String, Value>,
        scenario_id: String,
    ) -> Response {
        if self.webhooks.is_active(token) {
            let description = "Conflict: can't use getUpdates method while webhook is active";
            let envelope = error_envelope(409, description);
            self.record(token, "getUpdates", Some(params), scenario_id, envelope.clone(), true, 409);
            return json_response(409, &envelope);
        }

        let offset = param_i64(&params, "offset").unwrap_or(0);
        let limit = param_i64(&params, "limit").unwrap_or(100).max(0) as usize;

        if offset > 0 {
            self.updates.acknowledge(offset);
        }

        let updates = self.updates.get(offset, limit);
        let result = Value::Array(updates.into_iter().map(Value::Object).collect());

        let envelope = success_envelope(result);
        self.record(token, "getUpdates", Some(params), scenario_id, envelope.clone(), false, 200);
        json_response(200, &envelope)
    }

    fn handle_set_webhook(&self, token: &str, params: Map<String, Value>) -> Response {
        let url = param_str(&params, "url").unwrap_or("");

        if url.is_empty() {
            // Empty URL is equivalent to deleteWebhook
            self.webhooks.delete(token);
        } else {
            let allowed_updates = params
                .get("allowed_updates")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();

            self.webhooks.set(
                token,
                webhook::Config {
                    url: url.to_string(),
                    secret_token: param_str(&params, "secret_token").map(str::to_string),
                    ip_address: param_str(&params, "ip_address").map(str::to_string),
                    max_connections: param_i64(&params, "max_connections").map(|v| v as u32),
                    allowed_updates,
                    ..Default::default()
                },
            );
            log::debug!("webhook registered for {}: {}", token, url);
        }

        if param_bool(&params, "drop_pending_updates") {
            self.updates.clear();
        }

        let envelope = success_envelope(Value::Bool(true));
        self.record(token, "setWebhook", Some(params), String::new(), envelope.clone(), false, 200);
        json_response(200, &envelope)
    }

    fn handle_delete_webhook(&self, token: &str, params: Map<String, Value>) -> Response {
        self.webhooks.delete(token);

        if param_bool(&params, "drop_pending_updates") {
            self.updates.clear();
        }

        let envelope = success_envelope(Value::Bool(true));
        self.record(token, "deleteWebhook", Some(params), String::new(), envelope.clone(), false, 200);
        json_response(200, &envelope)
    }

    fn handle_get_webhook_info(&self, token: &str) -> Response {
        let pending = self.updates.pending();
        let info = self.webhooks.get_info(token, pending);

        let envelope = success_envelope(Value::Object(info));
        self.record(token, "getWebhookInfo", None, String::new(), envelope.clone(), false, 200);
        json_response(200, &envelope)
    }
}
