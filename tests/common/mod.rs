#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{Value, json};

use abr_lookup::domain::registry::RegistryApi;
use abr_lookup::error::AbrError;
use abr_lookup::prelude::*;

/// Registry stub with a queue of canned responses and a call recorder.
///
/// Responses are served in FIFO order; running out of them fails the call,
/// which makes an unexpected extra dispatch visible in the test.
pub struct StubRegistry {
    responses: Mutex<VecDeque<Result<Value, AbrError>>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl StubRegistry {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn push_response(&self, response: Result<Value, AbrError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Returns the recorded `(operation, message)` pairs in dispatch order.
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl RegistryApi for StubRegistry {
    async fn call(&self, operation: &str, message: Value) -> Result<Value, AbrError> {
        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), message));

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AbrError::unexpected("no stubbed response left")))
    }
}

pub fn create_test_service(registry: Arc<StubRegistry>) -> LookupService<StubRegistry> {
    LookupService::new(registry, AbrConfig::with_guid("integration-test-guid"))
}

/// Wraps a response node in the registry's outer envelope.
pub fn wrap_response(response: Value) -> Value {
    json!({ "abr_payload_search_results": { "response": response } })
}

pub fn entity_response(name: &str, abn: &str) -> Value {
    wrap_response(json!({
        "business_entity": {
            "abn": { "identifier_value": abn, "is_current_indicator": "Y" },
            "entity_type": { "entity_description": "Australian Private Company" },
            "entity_status": { "entity_status_code": "Active", "effective_from": "2000-07-01" },
            "main_name": { "organisation_name": name },
            "main_business_physical_address": { "state_code": "NSW", "postcode": "2040" }
        }
    }))
}

pub fn exception_response(description: &str) -> Value {
    wrap_response(json!({
        "exception": { "exception_description": description }
    }))
}
