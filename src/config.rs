//! YAML configuration loading.
//!
//! Every CLI flag overrides its config counterpart; the server consumes the
//! merged result. Tokens may carry an optional webhook block so a test
//! fixture can start the server with webhook mode already active.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MockResult;
use crate::scenario::Scenario;
use crate::tokens::Status;

/// Top-level configuration for the mock server.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub tokens: HashMap<String, TokenConfig>,
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
}

/// Server-related configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub verbose: bool,
    /// Reject unknown request fields during validation.
    pub strict: bool,
    /// Seed for the faker (0 = random, positive = fixed for determinism).
    pub faker_seed: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8081,
            verbose: false,
            strict: false,
            faker_seed: 0,
        }
    }
}

/// File storage configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    pub dir: Option<String>,
}

/// Webhook configuration preloaded for a bot token.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WebhookConfig {
    pub url: String,
    #[serde(default)]
    pub secret_token: Option<String>,
    #[serde(default)]
    pub ip_address: Option<String>,
    #[serde(default)]
    pub max_connections: Option<u32>,
    #[serde(default)]
    pub allowed_updates: Vec<String>,
}

/// Configuration for a preloaded bot token.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenConfig {
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub bot_name: String,
    #[serde(default)]
    pub webhook: Option<WebhookConfig>,
}

impl Config {
    /// Read a YAML configuration file from the given path.
    pub fn load(path: impl AsRef<Path>) -> MockResult<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.server.port, 8081);
        assert!(!cfg.server.verbose);
        assert!(!cfg.server.strict);
        assert_eq!(cfg.server.faker_seed, 0);
        assert!(cfg.tokens.is_empty());
        assert!(cfg.scenarios.is_empty());
    }

    #[test]
    fn test_load_full_config() {
        let yaml = r#"
server:
  port: 9099
  verbose: true
  faker_seed: 12345
storage:
  dir: /tmp/tg-mock-files
tokens:
  "123456:TEST-token":
    status: active
    bot_name: test_bot
    webhook:
      url: http://localhost:9000/hook
      secret_token: shh
  "99:banned":
    status: banned
scenarios:
  - method: sendMessage
    match:
      chat_id: 999
    times: 1
    response:
      error_code: 400
      description: "Bad Request: chat not found"
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.server.port, 9099);
        assert!(cfg.server.verbose);
        assert_eq!(cfg.server.faker_seed, 12345);
        assert_eq!(cfg.storage.dir.as_deref(), Some("/tmp/tg-mock-files"));

        let token = &cfg.tokens["123456:TEST-token"];
        assert_eq!(token.status, Status::Active);
        assert_eq!(token.bot_name, "test_bot");
        let webhook = token.webhook.as_ref().unwrap();
        assert_eq!(webhook.url, "http://localhost:9000/hook");
        assert_eq!(webhook.secret_token.as_deref(), Some("shh"));

        assert_eq!(cfg.tokens["99:banned"].status, Status::Banned);

        assert_eq!(cfg.scenarios.len(), 1);
        let sc = &cfg.scenarios[0];
        assert_eq!(sc.method, "sendMessage");
        assert_eq!(sc.times, 1);
        let resp = sc.response.as_ref().unwrap();
        assert_eq!(resp.error_code, 400);
        assert_eq!(resp.description, "Bad Request: chat not found");
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load("/nonexistent/tg-mock.yaml").is_err());
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"server:\n  port: 1234\n").unwrap();

        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.server.port, 1234);
        assert!(!cfg.server.strict);
        assert!(cfg.tokens.is_empty());
    }
}
