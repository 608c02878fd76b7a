// Shared test support code for integration tests.
// This module provides common utilities that all test files can use.

pub mod cache;
pub mod events;
pub mod logs;
pub mod manager;
pub mod metrics;

pub use cache::{feed_store, fill, fill_other, FeedRegion, OtherRegion};
pub use events::{doc, ScriptedHandler};
pub use logs::{capture_events, Captured};
pub use manager::{RecordingManager, Run};
pub use metrics::{block_on, capture_metrics};
