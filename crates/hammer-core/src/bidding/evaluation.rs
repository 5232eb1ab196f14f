// Everything the dashboard derives for one team from a snapshot.

use serde::Serialize;

use super::affordability::can_afford_next_bid;
use super::classifier::{classify_bid_state, BidState};
use super::validator::minimum_next_bid;
use super::wallet::{project_wallet, WalletProjection};
use crate::auction::snapshot::AuctionSnapshot;
use crate::auction::team::Team;
use crate::auction::Amount;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEvaluation {
    pub team_id: String,
    pub team_name: String,
    pub state: BidState,
    pub can_afford: bool,
    /// Smallest valid next bid on the open lot.
    pub minimum_next_bid: Option<Amount>,
    pub wallet: WalletProjection,
    pub wallet_remaining_pct: f64,
    pub squad_size: usize,
}

/// Evaluate one team against the snapshot's open lot.
pub fn evaluate_team(team: &Team, snapshot: &AuctionSnapshot) -> TeamEvaluation {
    let bid = snapshot.highest_bid.as_ref();
    let player = snapshot.current_player.as_ref();
    let increment = snapshot.min_bid_increment();

    TeamEvaluation {
        team_id: team.id.clone(),
        team_name: team.name.clone(),
        state: classify_bid_state(team, bid, player, increment),
        can_afford: can_afford_next_bid(Some(team), bid, player, increment),
        minimum_next_bid: minimum_next_bid(bid, player, increment),
        wallet: project_wallet(team, bid),
        wallet_remaining_pct: team.wallet_remaining_pct(),
        squad_size: team.squad_size(),
    }
}

/// Evaluate every team, in snapshot order.
pub fn evaluate_all(snapshot: &AuctionSnapshot) -> Vec<TeamEvaluation> {
    snapshot
        .teams
        .iter()
        .map(|team| evaluate_team(team, snapshot))
        .collect()
}
