// Worker functionality for cache management.

pub mod config;
pub mod evictor;

// Re-export main types
pub use config::{FixedDelay, WorkerConfig};
pub use evictor::Evictor;
