// Messages exchanged between the feed, the app orchestrator and the TUI.

use hammer_core::auction::player::{PlayerRole, PlayerStats, PlayerStatus};
use hammer_core::auction::Amount;
use hammer_core::bidding::TeamEvaluation;
use hammer_core::countdown::TimeRemaining;
use hammer_core::notify::NotificationLevel;

/// App -> TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// Full re-evaluated board for a new snapshot revision.
    Snapshot(Box<DashboardSnapshot>),
    /// A transient message for the notifications strip.
    Notify {
        level: NotificationLevel,
        message: String,
    },
    FeedStatus(FeedStatus),
    /// Latest countdown value; `None` when no auction date is scheduled.
    Countdown(Option<TimeRemaining>),
}

/// TUI -> app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Quit,
}

/// Health of the snapshot feed as shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FeedStatus {
    #[default]
    Waiting,
    Live,
    Error(String),
}

/// Everything the dashboard renders for one revision.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub revision: u64,
    pub min_bid_increment: Amount,
    pub lot: Option<LotInfo>,
    /// One evaluation per team, in snapshot order.
    pub teams: Vec<TeamEvaluation>,
    /// The configured home team, when it exists in the snapshot.
    pub my_team: Option<String>,
}

impl DashboardSnapshot {
    pub fn team(&self, team_id: &str) -> Option<&TeamEvaluation> {
        self.teams.iter().find(|t| t.team_id == team_id)
    }

    pub fn team_index(&self, team_id: &str) -> Option<usize> {
        self.teams.iter().position(|t| t.team_id == team_id)
    }
}

/// The open lot, flattened for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LotInfo {
    pub player_id: String,
    pub player_name: String,
    pub role: Option<PlayerRole>,
    pub status: PlayerStatus,
    pub base_price: Amount,
    /// Base price after the unsold reduction, for players back in the pool.
    pub reduced_base_price: Option<Amount>,
    pub stats: PlayerStats,
    /// False once the player is sold or withdrawn.
    pub biddable: bool,
    pub highest_bid: Option<Amount>,
    /// Display name of the leading team.
    pub leading_team: Option<String>,
    pub minimum_next_bid: Option<Amount>,
}
