//! FIFO queue of pending updates for long polling.
//!
//! Updates are opaque JSON objects; a monotonic `update_id` is assigned on
//! insert when absent. `getUpdates` acknowledges older updates by passing an
//! offset, which drops everything below it.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use serde_json::{Map, Value};

fn update_id_of(update: &Map<String, Value>) -> Option<i64> {
    let id = update.get("update_id")?;
    id.as_i64().or_else(|| id.as_f64().map(|f| f as i64))
}

/// Thread-safe update queue.
#[derive(Default)]
pub struct Queue {
    updates: RwLock<Vec<Map<String, Value>>>,
    id_counter: AtomicI64,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an update, assigning the next `update_id` when absent.
    /// Returns the update's id.
    pub fn add(&self, mut update: Map<String, Value>) -> i64 {
        let mut updates = self.updates.write().unwrap();

        let id = match update_id_of(&update) {
            Some(id) => id,
            None => {
                let id = self.id_counter.fetch_add(1, Ordering::SeqCst) + 1;
                update.insert("update_id".to_string(), Value::from(id));
                id
            }
        };

        updates.push(update);
        id
    }

    /// Return updates with `update_id >= offset` in insertion order, up to
    /// `limit` (0 = unbounded). An offset of 0 means "from the start".
    pub fn get(&self, offset: i64, limit: usize) -> Vec<Map<String, Value>> {
        let updates = self.updates.read().unwrap();

        let mut result = Vec::new();
        for update in updates.iter() {
            let id = update_id_of(update).unwrap_or(0);
            if offset == 0 || id >= offset {
                result.push(update.clone());
                if limit > 0 && result.len() >= limit {
                    break;
                }
            }
        }
        result
    }

    /// Drop all updates with `update_id < offset`.
    pub fn acknowledge(&self, offset: i64) {
        let mut updates = self.updates.write().unwrap();
        updates.retain(|u| update_id_of(u).unwrap_or(0) >= offset);
    }

    pub fn clear(&self) {
        let mut updates = self.updates.write().unwrap();
        updates.clear();
    }

    /// Count of pending updates.
    pub fn pending(&self) -> usize {
        let updates = self.updates.read().unwrap();
        updates.len()
    }
}
