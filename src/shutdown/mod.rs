// Package shutdown provides graceful shutdown functionality.

use anyhow::Result;
use std::time::Duration;
use tokio::signal;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
#[error("graceful shutdown timeout exceeded")]
pub struct TimeoutError;

/// Graceful shutdown handler.
///
/// Background tasks are spawned on the shared tracker; shutdown cancels the
/// shared token and waits for every tracked task to finish.
#[derive(Clone)]
pub struct GracefulShutdown {
    shutdown_token: CancellationToken,
    tracker: TaskTracker,
    timeout: Duration,
}

impl GracefulShutdown {
    /// Creates a new graceful shutdown handler
    pub fn new(shutdown_token: CancellationToken, timeout: Duration) -> Self {
        Self {
            shutdown_token,
            tracker: TaskTracker::new(),
            timeout,
        }
    }

    /// Tracker that background tasks must be spawned on.
    pub fn tracker(&self) -> &TaskTracker {
        &self.tracker
    }

    pub fn token(&self) -> &CancellationToken {
        &self.shutdown_token
    }

    /// Waits for shutdown signal and then waits for all tasks to complete
    pub async fn await_shutdown(&self) -> Result<()> {
        tokio::select! {
            _ = signal::ctrl_c() => {
                info!(
                    component = "graceful-shutdown",
                    event = "os_signal",
                    signal = "SIGINT",
                    "cancellation started"
                );
            }
            _ = self.shutdown_token.cancelled() => {
                info!(
                    component = "graceful-shutdown",
                    event = "ctx_done",
                    "cancellation started"
                );
            }
        }

        self.cancel_and_await_with_timeout().await
    }

    /// Cancels the shared token and waits for tracked tasks, bounded by the timeout.
    pub async fn cancel_and_await_with_timeout(&self) -> Result<()> {
        self.shutdown_token.cancel();
        self.tracker.close();

        match timeout(self.timeout, self.tracker.wait()).await {
            Ok(()) => {
                info!(
                    component = "graceful-shutdown",
                    event = "shutdown_success",
                    "service was gracefully shut down"
                );
                Ok(())
            }
            Err(_) => {
                warn!(
                    component = "graceful-shutdown",
                    event = "shutdown_timeout",
                    timeout_secs = self.timeout.as_secs(),
                    pending_tasks = self.tracker.len(),
                    "not all tasks were closed within timeout"
                );
                Err(TimeoutError.into())
            }
        }
    }
}
