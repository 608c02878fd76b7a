//! Prometheus metrics functionality.
//
//! Counters are recorded through the `metrics` facade; without an installed
//! recorder they are no-ops. The exporter is installed from `main`.

pub mod exporter;
pub mod meter;

// Re-export commonly used items
pub use exporter::init_prometheus_exporter;
pub use meter::*;
