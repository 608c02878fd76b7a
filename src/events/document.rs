use serde_json::Value;

use super::EventError;

/// Semi-structured event body: unique string keys mapped to JSON values.
pub type Document = serde_json::Map<String, Value>;

/// Decodes a provider event body. Only JSON objects are events.
pub fn parse_document(raw: &[u8]) -> Result<Document, EventError> {
    match serde_json::from_slice::<Value>(raw)? {
        Value::Object(doc) => Ok(doc),
        _ => Err(EventError::NotAnObject),
    }
}
