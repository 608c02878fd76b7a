// Main entrypoint for the feedcache service.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use feedcache::app::App;
use feedcache::config::{Config, ConfigTrait};
use feedcache::metrics;
use feedcache::shutdown::GracefulShutdown;

const CONFIG_PATH: &str = "cfg/feedcache.cfg.yaml";
const CONFIG_PATH_LOCAL: &str = "cfg/feedcache.cfg.local.yaml";

/// feedcache - periodic eviction of the feed discovery cache
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, value_name = "FILE")]
    cfg: Option<PathBuf>,
}

/// Loads the configuration struct from YAML file.
/// Tries local config first, then falls back to default config.
fn load_cfg(path: Option<PathBuf>) -> Result<(Config, PathBuf)> {
    if let Some(custom_path) = path {
        let cfg = Config::load(&custom_path)
            .with_context(|| format!("failed to load custom config from {:?}", custom_path))?;
        return Ok((cfg, custom_path));
    }

    match Config::load(CONFIG_PATH_LOCAL) {
        Ok(cfg) => Ok((cfg, PathBuf::from(CONFIG_PATH_LOCAL))),
        Err(_) => {
            let cfg = Config::load(CONFIG_PATH)
                .with_context(|| format!("failed to load config from {}", CONFIG_PATH))?;
            Ok((cfg, PathBuf::from(CONFIG_PATH)))
        }
    }
}

/// Configures structured logging based on configuration.
fn configure_logger(cfg: &Config) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let log_level = cfg
        .logs()
        .and_then(|logs| logs.level.as_deref())
        .unwrap_or("info");

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    if cfg.is_prod() {
        // Production: JSON format
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        // Development: Pretty console format
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty())
            .init();
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (cfg, path) = load_cfg(args.cfg)?;
    configure_logger(&cfg);
    info!(
        component = "config",
        event = "load_success",
        path = ?path,
        "config loaded"
    );

    // The exporter must be installed before the tokio runtime starts.
    if cfg.metrics().map(|m| m.enabled).unwrap_or(false) {
        let listen = cfg.metrics_listen()?;
        match metrics::init_prometheus_exporter(listen) {
            Ok(()) => info!(
                component = "metrics",
                event = "exporter_started",
                listen = %listen,
                "prometheus exporter initialized"
            ),
            Err(e) => warn!(
                component = "metrics",
                event = "exporter_failed",
                error = %e,
                "metrics endpoint will not be available"
            ),
        }
    }

    tokio::runtime::Runtime::new()
        .context("failed to create tokio runtime")?
        .block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<()> {
    let shutdown_token = CancellationToken::new();
    let graceful_shutdown = GracefulShutdown::new(shutdown_token, cfg.shutdown_timeout());

    let app = App::new(graceful_shutdown, cfg).context("failed to build application")?;
    app.serve();

    if let Err(e) = app.await_shutdown().await {
        error!(
            component = "main",
            scope = "service",
            event = "graceful_shutdown_failed",
            error = %e,
            "failed to gracefully shut down service"
        );
        return Err(e);
    }

    Ok(())
}
