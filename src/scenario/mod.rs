//! Scripted response overrides for the bot plane.
//!
//! A scenario matches API calls by method and parameter literals and either
//! injects an error envelope or overrides fields of the synthesized success
//! result. Rules are scanned in insertion order; the first non-exhausted
//! match wins.

mod builtin;

pub use builtin::builtin_error;

use std::sync::atomic::{AtomicI64, AtomicU32, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A Telegram API error envelope injected by a scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_code: u16,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u32>,
}

/// A single scripted rule.
///
/// `response` injects an error; `response_data` deep-merges into the
/// generated success result. When both are set the error wins.
#[derive(Debug, Serialize, Deserialize)]
pub struct Scenario {
    /// Auto-assigned as `scenario-N` when absent.
    #[serde(default)]
    pub id: String,
    /// Method to match, or "*" for any method.
    pub method: String,
    /// Parameter literals that must all be present and equal.
    #[serde(rename = "match", default)]
    pub match_params: Map<String, Value>,
    /// Number of times to trigger (0 = unlimited).
    #[serde(default)]
    pub times: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ErrorResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_data: Option<Map<String, Value>>,

    #[serde(skip)]
    used: AtomicU32,
}

impl Clone for Scenario {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            method: self.method.clone(),
            match_params: self.match_params.clone(),
            times: self.times,
            response: self.response.clone(),
            response_data: self.response_data.clone(),
            used: AtomicU32::new(self.used.load(Ordering::SeqCst)),
        }
    }
}

/// Compare a `match` literal against a request parameter.
///
/// Numbers are canonicalized before comparison so an integer-typed rule
/// entry still matches the same value decoded as a float (or vice versa).
/// Everything else compares by strict JSON equality.
pub(crate) fn values_match(expected: &Value, actual: &Value) -> bool {
    if let (Value::Number(e), Value::Number(a)) = (expected, actual) {
        if let (Some(x), Some(y)) = (e.as_i64(), a.as_i64()) {
            return x == y;
        }
        if let (Some(x), Some(y)) = (e.as_f64(), a.as_f64()) {
            return x == y;
        }
    }
    expected == actual
}

impl Scenario {
    /// Check whether this scenario matches the given method and parameters.
    pub fn matches(&self, method: &str, params: &Map<String, Value>) -> bool {
        if self.method != "*" && self.method != method {
            return false;
        }

        self.match_params.iter().all(|(key, expected)| {
            params
                .get(key)
                .map(|actual| values_match(expected, actual))
                .unwrap_or(false)
        })
    }

    /// Consume one use of the budget.
    ///
    /// Returns true while the use is within budget; unlimited scenarios
    /// always return true. The increment is atomic, so at most `times`
    /// callers succeed even when racing.
    pub fn consume(&self) -> bool {
        if self.times == 0 {
            return true;
        }
        let used = self.used.fetch_add(1, Ordering::SeqCst) + 1;
        used <= self.times
    }

    pub fn exhausted(&self) -> bool {
        self.times != 0 && self.used.load(Ordering::SeqCst) >= self.times
    }

    pub fn is_error(&self) -> bool {
        self.response.is_some()
    }
}

/// Ordered collection of scenarios.
#[derive(Default)]
pub struct Engine {
    scenarios: RwLock<Vec<Arc<Scenario>>>,
    id_counter: AtomicI64,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a scenario, assigning an id when absent. Returns the id.
    pub fn add(&self, mut scenario: Scenario) -> String {
        if scenario.id.is_empty() {
            let id = self.id_counter.fetch_add(1, Ordering::SeqCst) + 1;
            scenario.id = format!("scenario-{}", id);
        }
        let id = scenario.id.clone();

        let mut scenarios = self.scenarios.write().unwrap();
        scenarios.push(Arc::new(scenario));
        id
    }

    /// Return the first non-exhausted scenario matching the method and
    /// parameters, in insertion order.
    pub fn find(&self, method: &str, params: &Map<String, Value>) -> Option<Arc<Scenario>> {
        let scenarios = self.scenarios.read().unwrap();
        scenarios
            .iter()
            .find(|s| s.matches(method, params) && !s.exhausted())
            .cloned()
    }

    pub fn list(&self) -> Vec<Scenario> {
        let scenarios = self.scenarios.read().unwrap();
        scenarios.iter().map(|s| s.as_ref().clone()).collect()
    }

    pub fn count(&self) -> usize {
        let scenarios = self.scenarios.read().unwrap();
        scenarios.len()
    }

    /// Remove a scenario by id. Returns true if one was removed.
    pub fn remove(&self, id: &str) -> bool {
        let mut scenarios = self.scenarios.write().unwrap();
        let before = scenarios.len();
        scenarios.retain(|s| s.id != id);
        scenarios.len() != before
    }

    pub fn clear(&self) {
        let mut scenarios = self.scenarios.write().unwrap();
        scenarios.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    fn error_scenario(method: &str, match_params: Value, times: u32) -> Scenario {
        serde_json::from_value(json!({
            "method": method,
            "match": match_params,
            "times": times,
            "response": {"error_code": 400, "description": "Bad Request"},
        }))
        .unwrap()
    }

    #[test]
    fn test_matches_exact_method() {
        let s = error_scenario("sendMessage", json!({}), 0);
        assert!(s.matches("sendMessage", &Map::new()));
        assert!(!s.matches("getMe", &Map::new()));
    }

    #[test]
    fn test_matches_wildcard_method() {
        let s = error_scenario("*", json!({}), 0);
        assert!(s.matches("sendMessage", &Map::new()));
        assert!(s.matches("anything", &Map::new()));
    }

    #[test]
    fn test_matches_params() {
        let s = error_scenario("sendMessage", json!({"chat_id": 999}), 0);

        assert!(s.matches("sendMessage", &params(json!({"chat_id": 999, "text": "x"}))));
        assert!(!s.matches("sendMessage", &params(json!({"chat_id": 1}))));
        assert!(!s.matches("sendMessage", &params(json!({"text": "x"}))));
    }

    #[test]
    fn test_matches_canonicalizes_numbers() {
        let s = error_scenario("sendMessage", json!({"chat_id": 999}), 0);
        assert!(s.matches("sendMessage", &params(json!({"chat_id": 999.0}))));
    }

    #[test]
    fn test_consume_budget() {
        let s = error_scenario("sendMessage", json!({}), 2);
        assert!(s.consume());
        assert!(s.consume());
        assert!(!s.consume());
        assert!(s.exhausted());
    }

    #[test]
    fn test_unlimited_never_exhausts() {
        let s = error_scenario("sendMessage", json!({}), 0);
        for _ in 0..100 {
            assert!(s.consume());
        }
        assert!(!s.exhausted());
    }

    #[test]
    fn test_engine_assigns_ids() {
        let engine = Engine::new();
        let id1 = engine.add(error_scenario("sendMessage", json!({}), 0));
        let id2 = engine.add(error_scenario("getMe", json!({}), 0));
        assert_eq!(id1, "scenario-1");
        assert_eq!(id2, "scenario-2");
    }

    #[test]
    fn test_engine_keeps_provided_id() {
        let engine = Engine::new();
        let mut s = error_scenario("sendMessage", json!({}), 0);
        s.id = "my-id".to_string();
        assert_eq!(engine.add(s), "my-id");
    }

    #[test]
    fn test_engine_find_insertion_order() {
        let engine = Engine::new();
        engine.add(error_scenario("sendMessage", json!({}), 0));
        let mut second = error_scenario("sendMessage", json!({}), 0);
        second.id = "second".to_string();
        engine.add(second);

        let found = engine.find("sendMessage", &Map::new()).unwrap();
        assert_eq!(found.id, "scenario-1");
    }

    #[test]
    fn test_engine_find_skips_exhausted() {
        let engine = Engine::new();
        engine.add(error_scenario("sendMessage", json!({}), 1));
        let mut second = error_scenario("sendMessage", json!({}), 0);
        second.id = "fallback".to_string();
        engine.add(second);

        let first = engine.find("sendMessage", &Map::new()).unwrap();
        assert!(first.consume());
        assert!(first.exhausted());

        let next = engine.find("sendMessage", &Map::new()).unwrap();
        assert_eq!(next.id, "fallback");
    }

    #[test]
    fn test_engine_remove() {
        let engine = Engine::new();
        let id = engine.add(error_scenario("sendMessage", json!({}), 0));
        assert!(engine.remove(&id));
        assert!(!engine.remove(&id));
        assert!(engine.find("sendMessage", &Map::new()).is_none());
    }

    #[test]
    fn test_engine_clear() {
        let engine = Engine::new();
        engine.add(error_scenario("sendMessage", json!({}), 0));
        engine.add(error_scenario("getMe", json!({}), 0));
        engine.clear();
        assert_eq!(engine.count(), 0);
    }

    #[test]
    fn test_concurrent_consume_respects_budget() {
        use std::sync::Arc;

        let s = Arc::new(error_scenario("sendMessage", json!({}), 10));
        let mut handles = Vec::new();
        let successes = Arc::new(AtomicU32::new(0));

        for _ in 0..8 {
            let s = s.clone();
            let successes = successes.clone();
            handles.push(std::thread::spawn(move || {
                for _ in 0..10 {
                    if s.consume() {
                        successes.fetch_add(1, Ordering::SeqCst);
                    }
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(successes.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let s: Scenario = serde_json::from_value(json!({"method": "*"})).unwrap();
        assert_eq!(s.method, "*");
        assert_eq!(s.times, 0);
        assert!(s.response.is_none());
        assert!(s.response_data.is_none());
        assert!(s.match_params.is_empty());
    }
}
