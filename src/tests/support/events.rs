// Event fixtures and a scripted handler.

use parking_lot::Mutex;
use serde_json::Value;
use std::sync::Arc;

use crate::events::{Document, EventError, EventFailure, EventHandler};

/// Converts a `json!` object literal into a document.
pub fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Handler that fails events of the configured types and records every
/// payload it was given.
pub struct ScriptedHandler {
    fail_types: Vec<String>,
    message: String,
    seen: Mutex<Vec<Arc<Document>>>,
}

impl ScriptedHandler {
    pub fn accepting() -> Self {
        Self::failing_on(&[], "")
    }

    pub fn failing_on(types: &[&str], message: &str) -> Self {
        Self {
            fail_types: types.iter().map(|t| t.to_string()).collect(),
            message: message.to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen(&self) -> Vec<Arc<Document>> {
        self.seen.lock().clone()
    }
}

#[async_trait::async_trait]
impl EventHandler for ScriptedHandler {
    async fn handle(&self, payload: Arc<Document>) -> Result<(), EventError> {
        self.seen.lock().push(payload.clone());

        let event_type = payload.get("type").and_then(Value::as_str).unwrap_or_default();
        if self.fail_types.iter().any(|t| t == event_type) {
            return Err(EventFailure::new(self.message.clone(), Some(payload)).into());
        }
        Ok(())
    }
}
