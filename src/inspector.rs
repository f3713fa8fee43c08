//! Request recording for test assertions.
//!
//! Every exchange on the bot plane is appended here, successes and error
//! paths alike, so tests can assert on exactly what the bot under test sent.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Details of a single recorded Bot API exchange.
#[derive(Debug, Clone, Serialize)]
pub struct RequestRecord {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub token: String,
    pub method: String,
    pub params: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub scenario_id: String,
    pub response: Value,
    pub is_error: bool,
    pub status_code: u16,
}

impl RequestRecord {
    /// Build a record stamped with the current time; the recorder assigns
    /// the id on insert.
    pub fn new(
        token: impl Into<String>,
        method: impl Into<String>,
        params: Option<Map<String, Value>>,
        scenario_id: impl Into<String>,
        response: Value,
        is_error: bool,
        status_code: u16,
    ) -> Self {
        Self {
            id: 0,
            timestamp: Utc::now(),
            token: token.into(),
            method: method.into(),
            params,
            scenario_id: scenario_id.into(),
            response,
            is_error,
            status_code,
        }
    }
}

/// Append-only store of recorded requests.
#[derive(Default)]
pub struct Recorder {
    requests: RwLock<Vec<RequestRecord>>,
    id_counter: AtomicI64,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, assigning its monotonic id. Returns the id.
    pub fn record(&self, mut record: RequestRecord) -> i64 {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst) + 1;
        record.id = id;

        let mut requests = self.requests.write().unwrap();
        requests.push(record);
        id
    }

    /// List records filtered by exact method and/or token, truncated to
    /// `limit` (0 = unbounded).
    pub fn list(&self, method: Option<&str>, token: Option<&str>, limit: usize) -> Vec<RequestRecord> {
        let requests = self.requests.read().unwrap();

        let mut result = Vec::new();
        for record in requests.iter() {
            if let Some(m) = method {
                if record.method != m {
                    continue;
                }
            }
            if let Some(t) = token {
                if record.token != t {
                    continue;
                }
            }

            result.push(record.clone());
            if limit > 0 && result.len() >= limit {
                break;
            }
        }
        result
    }

    pub fn count(&self) -> usize {
        let requests = self.requests.read().unwrap();
        requests.len()
    }

    pub fn clear(&self) {
        let mut requests = self.requests.write().unwrap();
        requests.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_for(method: &str, token: &str) -> RequestRecord {
        RequestRecord::new(token, method, None, "", json!({"ok": true}), false, 200)
    }

    #[test]
    fn test_record_assigns_ids() {
        let recorder = Recorder::new();
        let id1 = recorder.record(record_for("getMe", "123:abc"));
        let id2 = recorder.record(record_for("getMe", "123:abc"));
        assert!(id2 > id1);
        assert_eq!(recorder.count(), 2);
    }

    #[test]
    fn test_list_filters_by_method() {
        let recorder = Recorder::new();
        recorder.record(record_for("getMe", "123:abc"));
        recorder.record(record_for("sendMessage", "123:abc"));
        recorder.record(record_for("getMe", "123:abc"));

        let result = recorder.list(Some("getMe"), None, 0);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|r| r.method == "getMe"));
    }

    #[test]
    fn test_list_filters_by_token() {
        let recorder = Recorder::new();
        recorder.record(record_for("getMe", "123:abc"));
        recorder.record(record_for("getMe", "456:def"));

        let result = recorder.list(None, Some("456:def"), 0);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].token, "456:def");
    }

    #[test]
    fn test_list_honors_limit() {
        let recorder = Recorder::new();
        for _ in 0..5 {
            recorder.record(record_for("getMe", "123:abc"));
        }
        assert_eq!(recorder.list(None, None, 3).len(), 3);
        assert_eq!(recorder.list(None, None, 0).len(), 5);
    }

    #[test]
    fn test_clear() {
        let recorder = Recorder::new();
        recorder.record(record_for("getMe", "123:abc"));
        recorder.clear();
        assert_eq!(recorder.count(), 0);
    }

    #[test]
    fn test_scenario_id_serialized_only_when_present() {
        let mut record = record_for("sendMessage", "123:abc");
        record.scenario_id = "header:rate_limit".to_string();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["scenario_id"], "header:rate_limit");

        let bare = serde_json::to_value(record_for("sendMessage", "123:abc")).unwrap();
        assert!(bare.get("scenario_id").is_none());
    }
}
