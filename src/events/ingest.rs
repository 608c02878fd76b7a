//! Boundary where inbound provider events are processed.
//!
//! Processing failures are expected here: they are logged together with the
//! event they concern and routed to the dead-letter sink. They are never
//! dropped; if the sink itself fails, the failure goes back to the caller.

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::metrics::meter;

use super::{parse_document, DeadLetter, DeadLetterEntry, Document, EventError, EventFailure};

/// The routine that processes a decoded event.
#[async_trait::async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, payload: Arc<Document>) -> Result<(), EventError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Processed,
    DeadLettered,
}

pub struct Ingestor {
    handler: Arc<dyn EventHandler>,
    dead_letter: Arc<dyn DeadLetter>,
}

impl Ingestor {
    pub fn new(handler: Arc<dyn EventHandler>, dead_letter: Arc<dyn DeadLetter>) -> Self {
        Self {
            handler,
            dead_letter,
        }
    }

    /// Decodes and processes a raw event body.
    pub async fn ingest(&self, raw: &[u8]) -> Result<Outcome, EventError> {
        let payload = match parse_document(raw) {
            Ok(doc) => Arc::new(doc),
            Err(err) => {
                meter::add_malformed(1);
                warn!(component = "ingest", event = "malformed_body", error = %err, "event rejected");
                return Err(err);
            }
        };

        self.process(payload).await
    }

    /// Processes an already decoded event.
    pub async fn process(&self, payload: Arc<Document>) -> Result<Outcome, EventError> {
        match self.handler.handle(payload).await {
            Ok(()) => Ok(Outcome::Processed),
            Err(EventError::Failure(failure)) => self.dead_letter(failure).await,
            Err(err) => Err(err),
        }
    }

    async fn dead_letter(&self, failure: EventFailure) -> Result<Outcome, EventError> {
        warn!(
            component = "ingest",
            event = "event_failed",
            event_id = failure.event_id().unwrap_or("-"),
            event_type = failure.event_type().unwrap_or("-"),
            error = %failure,
            "event processing failed"
        );
        if let Some(payload) = failure.payload() {
            match serde_json::to_string(payload.as_ref()) {
                Ok(body) => debug!(component = "ingest", payload = %body, "failed event payload"),
                Err(err) => debug!(component = "ingest", error = %err, "failed event payload is not serializable"),
            }
        }

        if let Err(err) = self.dead_letter.push(DeadLetterEntry::from_failure(&failure)).await {
            error!(
                component = "ingest",
                event = "dead_letter_failed",
                event_id = failure.event_id().unwrap_or("-"),
                error = %err,
                "failed to dead-letter event"
            );
            return Err(EventError::Failure(failure));
        }

        meter::add_dead_lettered(1);
        info!(
            component = "ingest",
            event = "dead_lettered",
            event_id = failure.event_id().unwrap_or("-"),
            "event dead-lettered"
        );
        Ok(Outcome::DeadLettered)
    }
}
