use serde_json::Value;
use std::sync::Arc;

use super::Document;

/// Failure while processing one inbound payment-provider event.
///
/// Holds the event payload by shared reference, so the document the provider
/// sent is the one a catching caller inspects. A missing payload is accepted.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct EventFailure {
    message: String,
    payload: Option<Arc<Document>>,
}

impl EventFailure {
    pub fn new(message: impl Into<String>, payload: Option<Arc<Document>>) -> Self {
        Self {
            message: message.into(),
            payload,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn payload(&self) -> Option<&Arc<Document>> {
        self.payload.as_ref()
    }

    /// Top-level payload field, e.g. `id` or `type`.
    pub fn payload_field(&self, key: &str) -> Option<&Value> {
        self.payload.as_ref().and_then(|doc| doc.get(key))
    }

    pub fn event_id(&self) -> Option<&str> {
        self.payload_field("id").and_then(Value::as_str)
    }

    pub fn event_type(&self) -> Option<&str> {
        self.payload_field("type").and_then(Value::as_str)
    }

    pub fn into_parts(self) -> (String, Option<Arc<Document>>) {
        (self.message, self.payload)
    }
}
