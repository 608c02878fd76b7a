//! Prometheus exporter bootstrap.

use anyhow::Result;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Installs the global Prometheus recorder with its own scrape listener.
///
/// Must be called BEFORE the tokio runtime starts: outside a runtime the
/// exporter spins up a dedicated background thread for its HTTP listener.
pub fn init_prometheus_exporter(listen: SocketAddr) -> Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(listen)
        .install()
        .map_err(|e| anyhow::anyhow!("failed to install Prometheus recorder: {}", e))
}
