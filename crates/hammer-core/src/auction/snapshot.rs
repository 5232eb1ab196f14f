// A point-in-time view of the auction as delivered by the live data feed.

use serde::{Deserialize, Serialize};

use super::bid::Bid;
use super::player::Player;
use super::settings::AuctionSettings;
use super::team::Team;

/// Everything the evaluator needs for one render cycle.
///
/// Snapshots are borrowed, never mutated. `revision` increases with every
/// change upstream; ordering is the feed's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionSnapshot {
    pub revision: u64,
    pub settings: AuctionSettings,
    #[serde(default)]
    pub teams: Vec<Team>,
    /// The open lot, if any.
    #[serde(default)]
    pub current_player: Option<Player>,
    /// Highest bid on the open lot, if any.
    #[serde(default)]
    pub highest_bid: Option<Bid>,
}

impl AuctionSnapshot {
    /// Look up a team by id.
    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    /// The team currently leading the open lot.
    pub fn leading_team(&self) -> Option<&Team> {
        self.highest_bid
            .as_ref()
            .and_then(|bid| self.team(&bid.team_id))
    }

    pub fn min_bid_increment(&self) -> f64 {
        self.settings.min_bid_increment
    }
}
