//! Inbound payment-provider events and the typed failure that carries them.

pub mod dead_letter;
pub mod document;
pub mod error;
pub mod failure;
pub mod ingest;


// Re-export main types
pub use dead_letter::{DeadLetter, DeadLetterEntry, MemoryDeadLetter};
pub use document::{parse_document, Document};
pub use error::EventError;
pub use failure::EventFailure;
pub use ingest::{EventHandler, Ingestor, Outcome};
