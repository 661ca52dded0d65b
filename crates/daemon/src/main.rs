use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use telecine_core::{
    create_queue, load_config, validate_config, ConversionWorker, DirectoryMonitor,
    FfmpegTranscoder, PathResolver, StaleFileReconciler, Transcoder,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("telecine {} starting", VERSION);

    // Determine config path
    let config_path = std::env::var("TELECINE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.toml"));

    // Load configuration
    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    // Validate configuration
    validate_config(&config).context("Configuration validation failed")?;

    info!(
        "Watching {} source folder(s), library at {}",
        config.watch.source_folders.len(),
        config.library.dest_root.display()
    );

    // Make sure the transcoder binary is usable before accepting work
    let transcoder = FfmpegTranscoder::new(config.transcoder.clone());
    transcoder
        .validate()
        .await
        .context("Transcoder validation failed")?;
    info!(
        "Transcoder validated at {}",
        config.transcoder.ffmpeg_path.display()
    );

    // Wire the conversion pipeline
    let resolver =
        PathResolver::new(&config.library).context("Failed to compile rename rules")?;
    let reconciler = StaleFileReconciler::new(config.retry);
    let worker = ConversionWorker::new(
        resolver,
        reconciler,
        transcoder,
        config.transcoder.skip_patterns.clone(),
        config.retry,
    );

    let (queue, runner) = create_queue(worker);
    let runner_handle = tokio::spawn(runner.run());

    // Start watching every configured source folder
    let monitor = DirectoryMonitor::new(queue, config.watch.incomplete_suffix.clone());
    for folder in &config.watch.source_folders {
        monitor
            .watch(folder)
            .await
            .with_context(|| format!("Failed to watch {}", folder.display()))?;
    }

    // Run until asked to stop
    shutdown_signal().await;
    info!("Shutting down...");

    // Stop the monitors, then drop every queue handle so the runner drains
    // what is left and exits. Order matters: the watch tasks hold handle
    // clones that are only released once they observe the stop signal.
    monitor.stop();
    drop(monitor);

    let _ = runner_handle.await;
    info!("Conversion queue drained");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
