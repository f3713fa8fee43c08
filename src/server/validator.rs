//! Request validation against the generated method specs.

use serde_json::{Map, Value};

use crate::gen::MethodSpec;

/// Validates Bot API requests. Type checking is intentionally best-effort:
/// parameter values are treated polymorphically downstream, so only field
/// presence is enforced here.
pub struct Validator {
    strict: bool,
}

impl Validator {
    /// `strict` additionally rejects fields the spec doesn't know about.
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Check that all required fields are present in params.
    pub fn validate(&self, spec: &MethodSpec, params: &Map<String, Value>) -> Result<(), String> {
        for field in spec.fields {
            if field.required && !params.contains_key(field.name) {
                return Err(format!("missing required field: {}", field.name));
            }
        }

        if self.strict {
            for key in params.keys() {
                if !spec.fields.iter().any(|f| f.name == key) {
                    return Err(format!("unknown field: {}", key));
                }
            }
        }

        Ok(())
    }
}
