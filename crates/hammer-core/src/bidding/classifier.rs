// Bid-state classification for one team against the open lot.

use serde::{Deserialize, Serialize};

use super::affordability::can_afford_next_bid;
use crate::auction::bid::Bid;
use crate::auction::player::Player;
use crate::auction::team::Team;
use crate::auction::Amount;

/// What a team's bidding panel should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidState {
    /// The team holds the highest bid.
    Winning,
    /// Another team leads and this team can still outbid it.
    OutbidAffordable,
    /// Another team leads beyond this team's wallet.
    OutbidUnaffordable,
    /// No bids yet and the team can cover the base price.
    OpenAffordable,
    /// No bids yet and the base price is out of reach.
    OpenUnaffordable,
    /// No lot is open.
    Inactive,
}

impl BidState {
    pub fn label(&self) -> &'static str {
        match self {
            BidState::Winning => "WINNING",
            BidState::OutbidAffordable => "OUTBID",
            BidState::OutbidUnaffordable => "OUT OF RANGE",
            BidState::OpenAffordable => "OPEN",
            BidState::OpenUnaffordable => "CAN'T AFFORD",
            BidState::Inactive => "IDLE",
        }
    }

    /// One-line explanation for the team dashboard.
    pub fn description(&self) -> &'static str {
        match self {
            BidState::Winning => "You hold the highest bid",
            BidState::OutbidAffordable => "You have been outbid, you can raise",
            BidState::OutbidUnaffordable => "Outbid beyond your remaining wallet",
            BidState::OpenAffordable => "No bids yet, you can open",
            BidState::OpenUnaffordable => "Base price exceeds your wallet",
            BidState::Inactive => "Waiting for the next player",
        }
    }

    /// Whether the bid button should be enabled.
    pub fn can_bid(&self) -> bool {
        matches!(self, BidState::OutbidAffordable | BidState::OpenAffordable)
    }
}

/// Classify `team` against the open lot. First match wins:
///
/// 1. no open lot: `Inactive`
/// 2. team leads: `Winning`
/// 3. another team leads: `OutbidAffordable` / `OutbidUnaffordable`
/// 4. no bids: `OpenAffordable` / `OpenUnaffordable`
pub fn classify_bid_state(
    team: &Team,
    highest_bid: Option<&Bid>,
    current_player: Option<&Player>,
    min_increment: Amount,
) -> BidState {
    if current_player.is_none() {
        return BidState::Inactive;
    }
    let affordable = can_afford_next_bid(Some(team), highest_bid, current_player, min_increment);
    match highest_bid {
        Some(bid) if bid.is_by(&team.id) => BidState::Winning,
        Some(_) if affordable => BidState::OutbidAffordable,
        Some(_) => BidState::OutbidUnaffordable,
        None if affordable => BidState::OpenAffordable,
        None => BidState::OpenUnaffordable,
    }
}
