// Hypothetical wallet after winning the open lot.

use serde::Serialize;

use crate::auction::bid::Bid;
use crate::auction::team::Team;
use crate::auction::Amount;

/// Wallet balance if the current highest bid stands.
///
/// Only the leading team has anything deducted. The result is not clamped:
/// a negative value means upstream accepted a bid the wallet could not
/// cover, and that should be visible.
pub fn project_wallet_after_win(team: &Team, highest_bid: Option<&Bid>) -> Amount {
    match highest_bid {
        Some(bid) if bid.is_by(&team.id) => team.wallet - bid.amount,
        _ => team.wallet,
    }
}

/// Wallet figures shown on a team's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletProjection {
    /// Balance right now.
    pub current: Amount,
    /// Balance if the highest bid stands.
    pub projected: Amount,
    /// Spent on players already won.
    pub spent_to_date: Amount,
    /// Spent including the open lot if the highest bid stands.
    pub spent_if_won: Amount,
}

pub fn project_wallet(team: &Team, highest_bid: Option<&Bid>) -> WalletProjection {
    let projected = project_wallet_after_win(team, highest_bid);
    let spent_to_date = team.total_spent();
    WalletProjection {
        current: team.wallet,
        projected,
        spent_to_date,
        spent_if_won: spent_to_date + (team.wallet - projected),
    }
}
