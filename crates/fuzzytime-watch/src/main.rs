#![doc = include_str!("../README.md")]

mod config;
mod host;
mod telemetry;

use clap::Parser;
use config::{CliArgs, WatchConfig};
use fuzzytime::{RunOutcome, Scheduler, SchedulerTokioExt, SystemClock};
use host::TerminalHost;
use telemetry::init_telemetry;
use tokio::signal;

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = WatchConfig::try_from(args)?;

    init_telemetry()?;
    log_startup_info(&config);

    let host = TerminalHost::new(config.timestamps, std::io::stdout());
    let targets = 0..host.len();
    let mut scheduler = Scheduler::new(host, SystemClock);
    scheduler.register(targets, config.settings);

    match scheduler.run_tokio(shutdown_signal()).await {
        RunOutcome::Shutdown => tracing::info!("Shut down successfully"),
        RunOutcome::Idle => tracing::debug!("Nothing left to refresh"),
    }
    Ok(())
}

fn log_startup_info(config: &WatchConfig) {
    if cfg!(debug_assertions) {
        tracing::debug!("Watching with full config: {:#?}", config);
    } else {
        tracing::debug!(
            "Watching {} timestamps every {}ms",
            config.timestamps.len(),
            config.settings.refresh_millis
        );
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        () = terminate => tracing::info!("Received SIGTERM signal"),
    }
}
