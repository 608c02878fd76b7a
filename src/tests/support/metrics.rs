// Captures metrics recorded inside a closure.

use metrics_exporter_prometheus::PrometheusBuilder;

/// Runs `f` with a thread-local Prometheus recorder and returns its result
/// along with the rendered exposition text.
pub fn capture_metrics<T>(f: impl FnOnce() -> T) -> (T, String) {
    let recorder = PrometheusBuilder::new().build_recorder();
    let handle = recorder.handle();

    let out = metrics::with_local_recorder(&recorder, f);
    (out, handle.render())
}

/// Runs an async block to completion on a current-thread runtime so the
/// thread-local recorder sees everything it records.
pub fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build current-thread runtime")
        .block_on(fut)
}
