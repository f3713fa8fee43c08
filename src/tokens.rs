//! Bot token registry.
//!
//! The registry is optional: when no tokens are preloaded it is disabled and
//! only the format check runs in the bot handler.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a registered bot token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Banned,
    Deactivated,
}

/// Metadata kept for a registered token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenInfo {
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub bot_name: String,
}

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+:[A-Za-z0-9_-]+$").unwrap());

/// Check that a token matches the `<bot_id>:<secret>` shape Telegram issues.
pub fn validate_format(token: &str) -> bool {
    TOKEN_PATTERN.is_match(token)
}

/// Thread-safe token registry.
#[derive(Default)]
pub struct Registry {
    tokens: RwLock<HashMap<String, TokenInfo>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, token: &str, info: TokenInfo) {
        let mut tokens = self.tokens.write().unwrap();
        tokens.insert(token.to_string(), info);
    }

    pub fn get(&self, token: &str) -> Option<TokenInfo> {
        let tokens = self.tokens.read().unwrap();
        tokens.get(token).cloned()
    }

    pub fn delete(&self, token: &str) {
        let mut tokens = self.tokens.write().unwrap();
        tokens.remove(token);
    }

    /// Update the status of a registered token.
    /// Returns false if the token is not registered.
    pub fn update_status(&self, token: &str, status: Status) -> bool {
        let mut tokens = self.tokens.write().unwrap();
        match tokens.get_mut(token) {
            Some(info) => {
                info.status = status;
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> HashMap<String, TokenInfo> {
        let tokens = self.tokens.read().unwrap();
        tokens.clone()
    }
}
