// Snapshot feed: where auction snapshots come from.
//
// `SnapshotFeed` is the seam for a live subscription. `FileFeed` polls a JSON
// file, which is enough to drive the board from an exporter or by hand.
// `run_feed` puts a `RevisionGate` in front of any feed so the app only ever
// sees strictly increasing revisions.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use hammer_core::auction::snapshot::AuctionSnapshot;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse snapshot {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A source of auction snapshots.
#[async_trait]
pub trait SnapshotFeed: Send {
    /// Wait for the next snapshot. `Ok(None)` means the feed has ended.
    async fn next_snapshot(&mut self) -> Result<Option<AuctionSnapshot>, FeedError>;
}

/// Polls a snapshot file on a fixed interval.
pub struct FileFeed {
    path: PathBuf,
    ticker: Interval,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>, poll_interval: Duration) -> Self {
        let mut ticker = tokio::time::interval(poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        FileFeed {
            path: path.into(),
            ticker,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Read and parse one snapshot file, blocking the calling thread.
pub fn read_snapshot(path: &Path) -> Result<AuctionSnapshot, FeedError> {
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    parse_snapshot(path, &text)
}

fn io_error(path: &Path, source: std::io::Error) -> FeedError {
    FeedError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn parse_snapshot(path: &Path, text: &str) -> Result<AuctionSnapshot, FeedError> {
    serde_json::from_str(text).map_err(|e| FeedError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[async_trait]
impl SnapshotFeed for FileFeed {
    async fn next_snapshot(&mut self) -> Result<Option<AuctionSnapshot>, FeedError> {
        self.ticker.tick().await;
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| io_error(&self.path, e))?;
        parse_snapshot(&self.path, &text).map(Some)
    }
}

/// Admits only snapshots newer than the last one admitted.
#[derive(Debug, Clone, Default)]
pub struct RevisionGate {
    last: Option<u64>,
}

impl RevisionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true (and records the revision) if `snapshot` is newer.
    pub fn admit(&mut self, snapshot: &AuctionSnapshot) -> bool {
        match self.last {
            Some(last) if snapshot.revision <= last => false,
            _ => {
                self.last = Some(snapshot.revision);
                true
            }
        }
    }

    pub fn last_revision(&self) -> Option<u64> {
        self.last
    }
}

/// Feed -> app.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    Snapshot(Box<AuctionSnapshot>),
    /// The feed started failing. Sent once per failure streak.
    Error(String),
    /// The feed is readable again after an error.
    Recovered,
}

/// Pull snapshots from `feed` and forward the admitted ones through `tx`.
///
/// Returns when the feed ends or the receiver is dropped.
pub async fn run_feed<F: SnapshotFeed>(
    mut feed: F,
    tx: mpsc::Sender<FeedEvent>,
) -> anyhow::Result<()> {
    let mut gate = RevisionGate::new();
    let mut failing = false;

    loop {
        let event = match feed.next_snapshot().await {
            Ok(None) => {
                info!("Snapshot feed ended");
                return Ok(());
            }
            Ok(Some(snapshot)) => {
                if failing {
                    failing = false;
                    info!("Snapshot feed recovered");
                    if tx.send(FeedEvent::Recovered).await.is_err() {
                        break;
                    }
                }
                if !gate.admit(&snapshot) {
                    debug!(
                        "Dropping snapshot revision {} (last admitted {:?})",
                        snapshot.revision,
                        gate.last_revision()
                    );
                    continue;
                }
                FeedEvent::Snapshot(Box::new(snapshot))
            }
            Err(e) => {
                if failing {
                    debug!("Snapshot feed still failing: {e}");
                    continue;
                }
                failing = true;
                warn!("Snapshot feed error: {e}");
                FeedEvent::Error(e.to_string())
            }
        };

        if tx.send(event).await.is_err() {
            break;
        }
    }

    debug!("Feed receiver dropped, stopping");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
