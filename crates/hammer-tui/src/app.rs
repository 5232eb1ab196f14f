// Application orchestrator: evaluates each snapshot and drives the TUI.
//
// Owns the previous snapshot so consecutive revisions can be diffed into
// notifications, and the countdown task for the scheduled auction start.

use std::time::Duration;

use chrono::{DateTime, Utc};
use hammer_core::auction::settings::{reduced_base_price, SettingsError};
use hammer_core::auction::player::PlayerStatus;
use hammer_core::auction::snapshot::AuctionSnapshot;
use hammer_core::auction::Amount;
use hammer_core::bidding::{evaluate_all, minimum_next_bid};
use hammer_core::countdown::{Countdown, TimeRemaining};
use hammer_core::notify::NotificationLevel;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::MoneyFormat;
use crate::feed::FeedEvent;
use crate::protocol::{DashboardSnapshot, FeedStatus, LotInfo, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// Snapshot diff
// ---------------------------------------------------------------------------

/// A new highest bid seen between two snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct HighBid {
    pub team_id: String,
    pub team_name: String,
    pub amount: Amount,
}

/// The result of comparing two consecutive snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotDiff {
    /// Name of the player whose lot just opened.
    pub lot_opened: Option<String>,
    /// Name of the player whose lot just closed.
    pub lot_closed: Option<String>,
    pub new_high_bid: Option<HighBid>,
    /// The configured team held the lead and lost it on the same lot.
    pub my_team_outbid: bool,
    pub auction_date_changed: bool,
}

impl SnapshotDiff {
    pub fn is_empty(&self) -> bool {
        *self == SnapshotDiff::default()
    }
}

/// Compare two consecutive snapshots.
///
/// With no `previous`, the current lot and bid are treated as new.
pub fn compute_snapshot_diff(
    previous: Option<&AuctionSnapshot>,
    current: &AuctionSnapshot,
    my_team: Option<&str>,
) -> SnapshotDiff {
    let mut diff = SnapshotDiff::default();

    let prev_lot = previous.and_then(|p| p.current_player.as_ref());
    let curr_lot = current.current_player.as_ref();

    let same_lot = match (prev_lot, curr_lot) {
        (None, None) => true,
        (None, Some(curr)) => {
            diff.lot_opened = Some(curr.name.clone());
            false
        }
        (Some(prev), None) => {
            diff.lot_closed = Some(prev.name.clone());
            false
        }
        (Some(prev), Some(curr)) if prev.id != curr.id => {
            diff.lot_closed = Some(prev.name.clone());
            diff.lot_opened = Some(curr.name.clone());
            false
        }
        (Some(_), Some(_)) => true,
    };

    let prev_bid = previous.and_then(|p| p.highest_bid.as_ref());
    if let Some(bid) = current.highest_bid.as_ref() {
        let changed = !same_lot
            || prev_bid.map_or(true, |prev| prev.id != bid.id || prev.amount != bid.amount);
        if changed {
            let team_name = current
                .team(&bid.team_id)
                .map(|t| t.name.clone())
                .unwrap_or_else(|| bid.team_id.clone());
            diff.new_high_bid = Some(HighBid {
                team_id: bid.team_id.clone(),
                team_name,
                amount: bid.amount,
            });
        }

        if let (true, Some(mine), Some(prev)) = (same_lot, my_team, prev_bid) {
            diff.my_team_outbid = prev.is_by(mine) && !bid.is_by(mine);
        }
    }

    let prev_date = previous.and_then(|p| p.settings.auction_date);
    diff.auction_date_changed = previous.is_none() || prev_date != current.settings.auction_date;

    diff
}

/// Turn a diff into notification messages, in display order.
pub fn diff_notifications(
    diff: &SnapshotDiff,
    my_team: Option<&str>,
    money: &MoneyFormat,
) -> Vec<(NotificationLevel, String)> {
    let mut out = Vec::new();

    if let Some(name) = &diff.lot_closed {
        out.push((NotificationLevel::Info, format!("Bidding closed on {name}")));
    }
    if let Some(name) = &diff.lot_opened {
        out.push((NotificationLevel::Info, format!("Now under the hammer: {name}")));
    }
    if diff.my_team_outbid {
        out.push((
            NotificationLevel::Warning,
            "You have been outbid".to_string(),
        ));
    }
    if let Some(high) = &diff.new_high_bid {
        let level = if my_team == Some(high.team_id.as_str()) {
            NotificationLevel::Success
        } else {
            NotificationLevel::Info
        };
        out.push((
            level,
            format!("{} bids {}", high.team_name, money.amount(high.amount)),
        ));
    }

    out
}

// ---------------------------------------------------------------------------
// Dashboard building
// ---------------------------------------------------------------------------

/// Evaluate every team and flatten the open lot for rendering.
pub fn build_dashboard(snapshot: &AuctionSnapshot, my_team: Option<&str>) -> DashboardSnapshot {
    let increment = snapshot.min_bid_increment();
    let bid = snapshot.highest_bid.as_ref();

    let lot = snapshot.current_player.as_ref().map(|player| {
        let reduced = matches!(player.status, PlayerStatus::Unsold)
            .then(|| reduced_base_price(player.base_price, &snapshot.settings));
        LotInfo {
            player_id: player.id.clone(),
            player_name: player.name.clone(),
            role: player.role,
            status: player.status,
            base_price: player.base_price,
            reduced_base_price: reduced,
            stats: player.stats.clone(),
            biddable: player.is_biddable(),
            highest_bid: bid.map(|b| b.amount),
            leading_team: snapshot.leading_team().map(|t| t.name.clone()),
            minimum_next_bid: minimum_next_bid(bid, Some(player), increment),
        }
    });

    DashboardSnapshot {
        revision: snapshot.revision,
        min_bid_increment: increment,
        lot,
        teams: evaluate_all(snapshot),
        my_team: my_team
            .filter(|id| snapshot.team(id).is_some())
            .map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Central application state owned by the app task.
pub struct AppState {
    pub my_team: Option<String>,
    pub money: MoneyFormat,
    pub feed_status: FeedStatus,
    /// Last snapshot the app processed.
    pub previous: Option<AuctionSnapshot>,
    countdown_tick: Duration,
    countdown: Option<Countdown>,
    countdown_target: Option<DateTime<Utc>>,
    /// Last settings problem reported, so each one is raised once.
    settings_problem: Option<SettingsError>,
}

impl AppState {
    pub fn new(my_team: Option<String>, money: MoneyFormat, countdown_tick: Duration) -> Self {
        AppState {
            my_team,
            money,
            feed_status: FeedStatus::Waiting,
            previous: None,
            countdown_tick,
            countdown: None,
            countdown_target: None,
            settings_problem: None,
        }
    }

    /// Process one admitted snapshot. Returns the UI updates to send and the
    /// diff against the previous snapshot.
    pub fn handle_snapshot(&mut self, snapshot: AuctionSnapshot) -> (Vec<UiUpdate>, SnapshotDiff) {
        let my_team = self.my_team.as_deref();
        let diff = compute_snapshot_diff(self.previous.as_ref(), &snapshot, my_team);
        if !diff.is_empty() {
            debug!("Revision {} diff: {:?}", snapshot.revision, diff);
        }

        let mut updates = Vec::new();
        if self.feed_status != FeedStatus::Live {
            self.feed_status = FeedStatus::Live;
            updates.push(UiUpdate::FeedStatus(FeedStatus::Live));
        }
        updates.push(UiUpdate::Snapshot(Box::new(build_dashboard(&snapshot, my_team))));
        for (level, message) in diff_notifications(&diff, my_team, &self.money) {
            updates.push(UiUpdate::Notify { level, message });
        }
        if let Some(update) = self.check_settings(&snapshot) {
            updates.push(update);
        }

        self.previous = Some(snapshot);
        (updates, diff)
    }

    /// Warn when the snapshot's settings fall outside their allowed ranges.
    /// The board keeps evaluating with whatever values arrived.
    fn check_settings(&mut self, snapshot: &AuctionSnapshot) -> Option<UiUpdate> {
        let problem = snapshot.settings.validate().err();
        if problem == self.settings_problem {
            return None;
        }
        self.settings_problem = problem;
        let err = self.settings_problem.as_ref()?;
        warn!("Revision {} has invalid settings: {}", snapshot.revision, err);
        Some(UiUpdate::Notify {
            level: NotificationLevel::Warning,
            message: format!("Auction settings invalid: {err}"),
        })
    }

    /// Translate a feed health change into UI updates.
    pub fn handle_feed_problem(&mut self, event: &FeedEvent) -> Vec<UiUpdate> {
        match event {
            FeedEvent::Error(message) => {
                self.feed_status = FeedStatus::Error(message.clone());
                vec![
                    UiUpdate::FeedStatus(self.feed_status.clone()),
                    UiUpdate::Notify {
                        level: NotificationLevel::Error,
                        message: format!("Feed error: {message}"),
                    },
                ]
            }
            FeedEvent::Recovered => {
                self.feed_status = FeedStatus::Live;
                vec![
                    UiUpdate::FeedStatus(FeedStatus::Live),
                    UiUpdate::Notify {
                        level: NotificationLevel::Success,
                        message: "Feed recovered".to_string(),
                    },
                ]
            }
            FeedEvent::Snapshot(_) => Vec::new(),
        }
    }

    /// Restart the countdown if the scheduled auction date changed.
    ///
    /// Returns an update to clear the countdown when no date is set.
    pub fn sync_countdown(
        &mut self,
        target: Option<DateTime<Utc>>,
        tx: &mpsc::Sender<TimeRemaining>,
    ) -> Option<UiUpdate> {
        if target == self.countdown_target && (target.is_none() || self.countdown.is_some()) {
            return None;
        }
        self.countdown_target = target;

        if let Some(previous) = self.countdown.take() {
            previous.cancel();
        }
        match target {
            Some(at) => {
                info!("Counting down to auction start at {}", at);
                self.countdown = Some(Countdown::spawn(
                    at,
                    self.countdown_tick,
                    Utc::now,
                    tx.clone(),
                ));
                None
            }
            None => Some(UiUpdate::Countdown(None)),
        }
    }

    pub fn countdown_target(&self) -> Option<DateTime<Utc>> {
        self.countdown_target
    }

    pub fn has_countdown(&self) -> bool {
        self.countdown.is_some()
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

async fn send_all(ui_tx: &mpsc::Sender<UiUpdate>, updates: Vec<UiUpdate>) {
    for update in updates {
        let _ = ui_tx.send(update).await;
    }
}

/// Run the application event loop.
///
/// Listens on the feed, user commands and countdown ticks until the user
/// quits or the command channel closes.
pub async fn run(
    mut feed_rx: mpsc::Receiver<FeedEvent>,
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    let (countdown_tx, mut countdown_rx) = mpsc::channel::<TimeRemaining>(8);

    // The feed may end (e.g. scripted feeds); keep serving commands after.
    let mut feed_open = true;

    loop {
        tokio::select! {
            event = feed_rx.recv(), if feed_open => {
                match event {
                    Some(FeedEvent::Snapshot(snapshot)) => {
                        let target = snapshot.settings.auction_date;
                        let revision = snapshot.revision;
                        let (updates, diff) = state.handle_snapshot(*snapshot);
                        send_all(&ui_tx, updates).await;
                        if diff.auction_date_changed {
                            if let Some(update) = state.sync_countdown(target, &countdown_tx) {
                                let _ = ui_tx.send(update).await;
                            }
                        }
                        debug!("Processed revision {}", revision);
                    }
                    Some(problem) => {
                        let updates = state.handle_feed_problem(&problem);
                        send_all(&ui_tx, updates).await;
                    }
                    None => {
                        warn!("Feed channel closed");
                        feed_open = false;
                    }
                }
            }

            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(UserCommand::Quit) | None => {
                        info!("Shutting down application loop");
                        break;
                    }
                }
            }

            Some(remaining) = countdown_rx.recv() => {
                let _ = ui_tx.send(UiUpdate::Countdown(Some(remaining))).await;
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
