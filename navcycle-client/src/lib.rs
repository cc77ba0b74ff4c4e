use std::io::Write;
use std::path::Path;

use tokio::sync::watch;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

pub mod cli;
pub mod config;
pub mod cycler;
pub mod notify;
pub mod platform;
pub mod preview;
pub mod timer;

pub use cli::{Cli, Command};
pub use config::{ClientConfig, load_config, resolve_config_path};
pub use cycler::NotificationCycler;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Install the global subscriber. With `log_dir` set, logs go to a daily
/// rolling file; the returned guard must live until shutdown to flush it.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact();
    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "navcycle.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            builder.with_writer(writer).with_ansi(false).init();
            Some(guard)
        }
        None => {
            builder.init();
            None
        }
    }
}

pub async fn run(cli: Cli) -> Result<(), AppError> {
    let tick_limit = match cli.command {
        Some(Command::Preview { start, count, json }) => {
            let mut out = std::io::stdout().lock();
            preview::write_preview(&mut out, start, count, json)?;
            out.flush()?;
            return Ok(());
        }
        Some(Command::Run { ticks }) => ticks,
        None => None,
    };

    let (cfg_path, cfg) = ClientConfig::find_and_load(cli.config)?;
    let _log_guard = init_tracing(cfg.log_dir.as_deref());
    info!(path=?cfg_path, "loaded config");

    let presenter = platform::detect(&cfg);
    let mut cycler = NotificationCycler::new(presenter).with_interval(cfg.tick_interval());
    let mut counter_rx = cycler.ticks();

    cycler.activate().await;

    tokio::select! {
        _ = shutdown_signal() => {
            info!("shutdown signal received; stopping cycler");
        }
        _ = wait_for_ticks(&mut counter_rx, tick_limit) => {
            info!(ticks = ?tick_limit, "tick limit reached; stopping cycler");
        }
    }

    cycler.deactivate().await;
    Ok(())
}

/// Resolves once the counter reaches `limit`; never resolves without one.
async fn wait_for_ticks(counter_rx: &mut watch::Receiver<u64>, limit: Option<u64>) {
    let Some(limit) = limit else {
        return std::future::pending().await;
    };
    if counter_rx.wait_for(|c| *c >= limit).await.is_err() {
        std::future::pending::<()>().await;
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};
        let mut sigint = signal(SignalKind::interrupt()).expect("listen SIGINT");
        let mut sigterm = signal(SignalKind::terminate()).expect("listen SIGTERM");
        tokio::select! {
            _ = sigint.recv() => {
                info!("shutdown: received SIGINT");
            }
            _ = sigterm.recv() => {
                info!("shutdown: received SIGTERM");
            }
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.expect("listen for ctrl_c");
        info!("shutdown: received ctrl_c");
    }
}
