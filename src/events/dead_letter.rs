//! Sink for events whose processing failed.

use anyhow::Result;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;

use super::{Document, EventFailure};

/// A failed event kept for later inspection or re-submission.
#[derive(Debug, Clone, Serialize)]
pub struct DeadLetterEntry {
    pub message: String,
    pub payload: Option<Arc<Document>>,
    /// Unix millis.
    pub failed_at: i64,
}

impl DeadLetterEntry {
    pub fn from_failure(failure: &EventFailure) -> Self {
        Self {
            message: failure.message().to_string(),
            payload: failure.payload().cloned(),
            failed_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[async_trait::async_trait]
pub trait DeadLetter: Send + Sync {
    async fn push(&self, entry: DeadLetterEntry) -> Result<()>;
}

/// Unbounded in-process dead-letter queue.
#[derive(Default)]
pub struct MemoryDeadLetter {
    entries: Mutex<Vec<DeadLetterEntry>>,
}

impl MemoryDeadLetter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<DeadLetterEntry> {
        self.entries.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl DeadLetter for MemoryDeadLetter {
    async fn push(&self, entry: DeadLetterEntry) -> Result<()> {
        self.entries.lock().push(entry);
        Ok(())
    }
}
