//! Per-token webhook registry and the HTTP deliverer.
//!
//! A delivered update may be answered with a method invocation in the HTTP
//! response body (the "method-in-response" convention); the deliverer
//! executes it through the injected [`MethodExecutor`] so it never depends
//! on the bot handler directly.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::gen::MethodSpec;

/// Executes a Bot API method on behalf of the deliverer.
///
/// Implemented by the responder; injected here to break the cycle between
/// the webhook registry and the bot handler.
pub trait MethodExecutor: Send + Sync {
    fn execute(&self, spec: &'static MethodSpec, params: &Map<String, Value>) -> Value;
}

/// A registered webhook configuration for a bot token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_updates: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error_message: Option<String>,
    #[serde(default)]
    pub created_at: i64,
}

/// Outcome of executing a method returned in a webhook response body.
#[derive(Debug, Clone, Serialize)]
pub struct MethodResult {
    pub method: String,
    pub params: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Result of a webhook delivery attempt.
#[derive(Debug, Clone, Serialize)]
pub struct DeliveryResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub response_body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_result: Option<MethodResult>,
}

impl DeliveryResult {
    fn failure(error: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            success: false,
            status_code: None,
            response_body: String::new(),
            error: Some(error.into()),
            duration_ms,
            method_result: None,
        }
    }
}

/// Webhook configurations per bot token, plus the deliverer.
pub struct Registry {
    webhooks: RwLock<HashMap<String, Config>>,
    client: reqwest::Client,
    executor: Arc<dyn MethodExecutor>,
}

impl Registry {
    pub fn new(executor: Arc<dyn MethodExecutor>) -> Self {
        Self {
            webhooks: RwLock::new(HashMap::new()),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            executor,
        }
    }

    /// Register or replace the webhook for a token.
    pub fn set(&self, token: &str, mut config: Config) {
        if config.created_at == 0 {
            config.created_at = Utc::now().timestamp();
        }
        let mut webhooks = self.webhooks.write().unwrap();
        webhooks.insert(token.to_string(), config);
    }

    pub fn get(&self, token: &str) -> Option<Config> {
        let webhooks = self.webhooks.read().unwrap();
        webhooks.get(token).cloned()
    }

    /// Remove the webhook for a token. Returns true if one was removed.
    pub fn delete(&self, token: &str) -> bool {
        let mut webhooks = self.webhooks.write().unwrap();
        webhooks.remove(token).is_some()
    }

    pub fn is_active(&self, token: &str) -> bool {
        let webhooks = self.webhooks.read().unwrap();
        webhooks.get(token).map(|c| !c.url.is_empty()).unwrap_or(false)
    }

    pub fn list(&self) -> HashMap<String, Config> {
        let webhooks = self.webhooks.read().unwrap();
        webhooks.clone()
    }

    pub fn clear(&self) {
        let mut webhooks = self.webhooks.write().unwrap();
        webhooks.clear();
    }

    /// Build a `WebhookInfo` object for `getWebhookInfo`.
    pub fn get_info(&self, token: &str, pending_count: usize) -> Map<String, Value> {
        let webhooks = self.webhooks.read().unwrap();

        let mut info = Map::new();
        let config = match webhooks.get(token) {
            Some(config) => config,
            None => {
                info.insert("url".into(), Value::from(""));
                info.insert("has_custom_certificate".into(), Value::from(false));
                info.insert("pending_update_count".into(), Value::from(pending_count));
                return info;
            }
        };

        info.insert("url".into(), Value::from(config.url.clone()));
        // Custom certificates are not supported
        info.insert("has_custom_certificate".into(), Value::from(false));
        info.insert("pending_update_count".into(), Value::from(pending_count));

        if let Some(ip) = &config.ip_address {
            info.insert("ip_address".into(), Value::from(ip.clone()));
        }
        if let Some(max) = config.max_connections {
            info.insert("max_connections".into(), Value::from(max));
        }
        if !config.allowed_updates.is_empty() {
            info.insert("allowed_updates".into(), Value::from(config.allowed_updates.clone()));
        }
        if let Some(date) = config.last_error_date {
            info.insert("last_error_date".into(), Value::from(date));
        }
        if let Some(message) = &config.last_error_message {
            info.insert("last_error_message".into(), Value::from(message.clone()));
        }

        info
    }

    fn record_delivery_error(&self, token: &str, message: &str) {
        let mut webhooks = self.webhooks.write().unwrap();
        if let Some(config) = webhooks.get_mut(token) {
            config.last_error_date = Some(Utc::now().timestamp());
            config.last_error_message = Some(message.to_string());
        }
    }

    fn clear_delivery_error(&self, token: &str) {
        let mut webhooks = self.webhooks.write().unwrap();
        if let Some(config) = webhooks.get_mut(token) {
            config.last_error_date = None;
            config.last_error_message = None;
        }
    }

    /// POST an update to the webhook registered for `token`.
    ///
    /// The URL and secret are copied out before any I/O so no lock is held
    /// across the request. A 2xx response body that names a `method` is
    /// executed through the injected executor and the outcome attached to
    /// the result.
    pub async fn deliver(&self, token: &str, update: &Map<String, Value>) -> DeliveryResult {
        let (url, secret) = {
            let webhooks = self.webhooks.read().unwrap();
            match webhooks.get(token) {
                Some(config) if !config.url.is_empty() => {
                    (config.url.clone(), config.secret_token.clone())
                }
                _ => return DeliveryResult::failure("no webhook configured", 0),
            }
        };

        let mut request = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(update);
        if let Some(secret) = secret {
            request = request.header("X-Telegram-Bot-Api-Secret-Token", secret);
        }

        let start = Instant::now();
        let response = request.send().await;
        let duration_ms = start.elapsed().as_millis() as u64;

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                let message = e.to_string();
                self.record_delivery_error(token, &message);
                log::debug!("webhook delivery to {} failed: {}", url, message);
                return DeliveryResult::failure(message, duration_ms);
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let success = status.is_success();

        let mut result = DeliveryResult {
            success,
            status_code: Some(status.as_u16()),
            response_body: body,
            error: None,
            duration_ms,
            method_result: None,
        };

        if success {
            self.clear_delivery_error(token);
            result.method_result = self.execute_response_method(&result.response_body);
        } else {
            let message = status.to_string();
            self.record_delivery_error(token, &message);
            result.error = Some(message);
        }

        result
    }

    /// Parse a successful response body for the method-in-response
    /// convention. Invalid JSON or a body without a `method` field is not an
    /// error; an unknown method is reported but never executed.
    fn execute_response_method(&self, body: &str) -> Option<MethodResult> {
        let parsed: Value = serde_json::from_str(body).ok()?;
        let mut params = match parsed {
            Value::Object(map) => map,
            _ => return None,
        };

        let method = match params.remove("method") {
            Some(Value::String(method)) => method,
            _ => return None,
        };

        let spec = match crate::gen::method_spec(&method) {
            Some(spec) => spec,
            None => {
                return Some(MethodResult {
                    error: Some(format!("unknown method: {}", method)),
                    method,
                    params,
                    response: None,
                });
            }
        };

        let response = self.executor.execute(spec, &params);
        Some(MethodResult {
            method,
            params,
            response: Some(response),
            error: None,
        })
    }
}
