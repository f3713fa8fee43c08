//! Bridges method specs to the faker.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::faker::Faker;
use crate::gen::MethodSpec;
use crate::webhook::MethodExecutor;

/// Generates responses for Bot API methods from their spec return type.
pub struct Responder {
    faker: Arc<Faker>,
}

impl Responder {
    pub fn new(faker: Arc<Faker>) -> Self {
        Self { faker }
    }

    /// Produce a response for the method's primary return type.
    pub fn generate(&self, spec: &MethodSpec, params: &Map<String, Value>) -> Value {
        self.generate_with_overrides(spec, params, None)
    }

    /// Produce a response with scenario overrides merged in.
    pub fn generate_with_overrides(
        &self,
        spec: &MethodSpec,
        params: &Map<String, Value>,
        overrides: Option<&Map<String, Value>>,
    ) -> Value {
        let return_type = match spec.returns.first() {
            Some(return_type) => return_type,
            None => return Value::Bool(true),
        };
        self.faker.generate_with_overrides(return_type, params, overrides)
    }

    pub fn faker(&self) -> &Arc<Faker> {
        &self.faker
    }
}

impl MethodExecutor for Responder {
    fn execute(&self, spec: &'static MethodSpec, params: &Map<String, Value>) -> Value {
        self.generate(spec, params)
    }
}
