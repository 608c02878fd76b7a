//! Fixed-delay eviction worker for the feed discovery cache.

pub mod counters;
#[allow(clippy::module_inception)]
pub mod evictor;
pub mod telemetry;


pub use counters::{Counters, Stats};
pub use evictor::{Evictor, SVC_EVICTOR};
