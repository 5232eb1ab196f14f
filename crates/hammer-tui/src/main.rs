// Auction board entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Create mpsc channels
// 4. Spawn snapshot feed task
// 5. Spawn app logic task
// 6. Run the TUI until the user quits
// 7. Cleanup on exit

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use hammer_core::notify::NotificationCenter;
use hammer_tui::app;
use hammer_tui::config;
use hammer_tui::feed;
use hammer_tui::tui;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not terminal)
    let log_path = init_tracing()?;
    info!("Auction board starting up (logging to {})", log_path.display());

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    let money = config.display.money_format();
    info!(
        "Config loaded: feed={}, poll every {}ms, my_team={:?}, money={:?}",
        config.feed.snapshot_path,
        config.feed.poll_interval_ms,
        config.display.my_team,
        money
    );

    // 3. Create mpsc channels
    let (feed_tx, feed_rx) = mpsc::channel(64);
    let (cmd_tx, cmd_rx) = mpsc::channel(16);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    // 4. Spawn snapshot feed task
    let file_feed = feed::FileFeed::new(&config.feed.snapshot_path, config.feed.poll_interval());
    let feed_handle = tokio::spawn(async move {
        if let Err(e) = feed::run_feed(file_feed, feed_tx).await {
            error!("Snapshot feed error: {}", e);
        }
    });

    // 5. Spawn app logic task
    let app_state = app::AppState::new(
        config.display.my_team.clone(),
        money.clone(),
        config.countdown.tick(),
    );
    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(feed_rx, cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // 6. Run the TUI (blocks until 'q' or Ctrl+C)
    let view_state = tui::ViewState::new(
        money,
        NotificationCenter::new(config.notifications.ttl(), config.notifications.capacity),
    );
    if let Err(e) = tui::run(ui_rx, cmd_tx, view_state).await {
        error!("TUI error: {:#}", e);
    }

    // 7. Cleanup: give the app task a moment, then stop the feed
    let _ = tokio::time::timeout(Duration::from_secs(5), app_handle).await;
    feed_handle.abort();

    info!("Auction board shut down cleanly");
    Ok(())
}

/// Resolve the log directory: the platform data dir when available,
/// otherwise `./logs`.
fn log_dir() -> anyhow::Result<PathBuf> {
    match directories::ProjectDirs::from("", "", "hammer") {
        Some(dirs) => Ok(dirs.data_local_dir().join("logs")),
        None => Ok(std::env::current_dir()?.join("logs")),
    }
}

/// Initialize tracing to log to a file (the terminal belongs to the TUI).
fn init_tracing() -> anyhow::Result<PathBuf> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let log_path = log_dir.join("hammer.log");
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("failed to create log file {}", log_path.display()))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("hammer_tui=info,hammer_core=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(log_path)
}
