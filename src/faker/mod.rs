//! Realistic mock data generation for Telegram Bot API types.
//!
//! The faker dispatches on the spec's return-type names, fills untyped leaf
//! fields from name-based heuristics, reflects identifying request
//! parameters back into the response, and deep-merges scenario overrides on
//! top. Randomness comes from a single seeded PRNG so a fixed seed yields a
//! reproducible stream across the same sequence of generate calls.

mod types;
mod values;

pub(crate) use values::{param_i64, param_str};

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::{Map, Value};

/// Generates mock data for Bot API responses.
///
/// All generation serializes on the PRNG lock, so under a fixed seed the
/// output depends only on the order of generate calls. The four ID counters
/// are strictly increasing regardless of interleaving.
pub struct Faker {
    rng: Mutex<StdRng>,
    message_id: AtomicI64,
    update_id: AtomicI64,
    user_id: AtomicI64,
    chat_id: AtomicI64,
}

fn rng_for_seed(seed: u64) -> StdRng {
    let seed = if seed == 0 { wall_clock_seed() } else { seed };
    StdRng::seed_from_u64(seed)
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

impl Faker {
    /// Create a faker. Seed 0 means "use wall-clock entropy"; any other
    /// seed produces a deterministic stream.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(rng_for_seed(seed)),
            message_id: AtomicI64::new(0),
            update_id: AtomicI64::new(0),
            user_id: AtomicI64::new(0),
            chat_id: AtomicI64::new(0),
        }
    }

    /// Re-seed the PRNG and zero all counters, for test isolation.
    pub fn reset(&self, seed: u64) {
        let mut rng = self.rng.lock().unwrap();
        *rng = rng_for_seed(seed);
        self.message_id.store(0, Ordering::SeqCst);
        self.update_id.store(0, Ordering::SeqCst);
        self.user_id.store(0, Ordering::SeqCst);
        self.chat_id.store(0, Ordering::SeqCst);
    }

    /// Generate mock data for the given Bot API type, reflecting request
    /// parameters where the type calls for it.
    pub fn generate(&self, type_name: &str, params: &Map<String, Value>) -> Value {
        self.generate_with_overrides(type_name, params, None)
    }

    /// Generate mock data and deep-merge user-specified overrides on top.
    pub fn generate_with_overrides(
        &self,
        type_name: &str,
        params: &Map<String, Value>,
        overrides: Option<&Map<String, Value>>,
    ) -> Value {
        let mut rng = self.rng.lock().unwrap();
        self.generate_locked(&mut rng, type_name, params, overrides)
    }

    fn generate_locked(
        &self,
        rng: &mut StdRng,
        type_name: &str,
        params: &Map<String, Value>,
        overrides: Option<&Map<String, Value>>,
    ) -> Value {
        // Primitive types
        match type_name {
            "Boolean" => {
                if let Some(v) = overrides.and_then(|o| o.get("value")) {
                    return v.clone();
                }
                return Value::Bool(true);
            }
            "Integer" => {
                if let Some(v) = overrides.and_then(|o| o.get("value")) {
                    return v.clone();
                }
                return Value::from(values::int_value(rng, "value"));
            }
            "String" => {
                if let Some(v) = overrides.and_then(|o| o.get("value")) {
                    return v.clone();
                }
                return Value::from(values::string_value(rng, "value"));
            }
            _ => {}
        }

        // Array types
        if let Some(element_type) = type_name.strip_prefix("Array of ") {
            return self.generate_array(rng, element_type, params, overrides);
        }

        // Type-specific generators; unknown types fall back to an empty
        // object that overrides can still populate.
        let mut result = match types::generate(self, rng, type_name, params) {
            Some(map) => map,
            None => Map::new(),
        };

        if let Some(overrides) = overrides {
            merge_overrides(&mut result, overrides);
        }

        Value::Object(result)
    }

    fn generate_array(
        &self,
        rng: &mut StdRng,
        element_type: &str,
        params: &Map<String, Value>,
        overrides: Option<&Map<String, Value>>,
    ) -> Value {
        // An "items" override replaces the whole array
        if let Some(Value::Array(items)) = overrides.and_then(|o| o.get("items")) {
            return Value::Array(items.clone());
        }

        let size = self.array_size(rng, element_type);
        let mut result = Vec::with_capacity(size);
        for _ in 0..size {
            result.push(self.generate_locked(rng, element_type, params, None));
        }
        Value::Array(result)
    }

    /// Array sizes follow the element type: photos come in three sizes,
    /// updates and entities default to empty, user lists hold one entry.
    fn array_size(&self, rng: &mut StdRng, element_type: &str) -> usize {
        match element_type {
            "PhotoSize" => 3,
            "MessageEntity" | "Update" => 0,
            "User" => 1,
            _ => values::rand_i64(rng, 0, 3) as usize,
        }
    }

    pub fn next_message_id(&self) -> i64 {
        self.message_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn next_update_id(&self) -> i64 {
        self.update_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn next_user_id(&self) -> i64 {
        self.user_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn next_chat_id(&self) -> i64 {
        self.chat_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Deep-merge overrides into a generated map: recurse where both sides are
/// objects, replace otherwise.
fn merge_overrides(base: &mut Map<String, Value>, overrides: &Map<String, Value>) {
    for (key, override_value) in overrides {
        if let (Some(Value::Object(existing)), Value::Object(nested)) =
            (base.get_mut(key), override_value)
        {
            merge_overrides(existing, nested);
            continue;
        }
        base.insert(key.clone(), override_value.clone());
    }
}
