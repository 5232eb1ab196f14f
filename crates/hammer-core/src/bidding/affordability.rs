// Whether a team can place the next valid bid on the open lot.

use crate::auction::bid::Bid;
use crate::auction::player::Player;
use crate::auction::team::Team;
use crate::auction::Amount;

/// Can `team` place the next valid bid?
///
/// - No open lot or no team: `false`.
/// - No bid yet: the wallet must cover the base price.
/// - The team already leads: `true`, it never has to outbid itself.
/// - Otherwise the wallet must cover the highest bid plus `min_increment`.
///
/// `min_increment` comes from the auction settings; there is no fallback.
pub fn can_afford_next_bid(
    team: Option<&Team>,
    highest_bid: Option<&Bid>,
    current_player: Option<&Player>,
    min_increment: Amount,
) -> bool {
    let (Some(team), Some(player)) = (team, current_player) else {
        return false;
    };

    match highest_bid {
        None => team.wallet >= player.base_price,
        Some(bid) if bid.is_by(&team.id) => true,
        Some(bid) => team.wallet >= bid.amount + min_increment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(wallet: Amount) -> Team {
        Team::new("t1", "Rajasthan", wallet)
    }

    fn player(base: Amount) -> Player {
        Player::new("p1", "Jaiswal", base)
    }

    #[test]
    fn absent_entities_cannot_afford() {
        let t = team(1e6);
        let p = player(100.0);
        assert!(!can_afford_next_bid(None, None, Some(&p), 100.0));
        assert!(!can_afford_next_bid(Some(&t), None, None, 100.0));
        assert!(!can_afford_next_bid(None, None, None, 100.0));
    }

    #[test]
    fn opening_bid_against_base_price() {
        let p = player(1000.0);
        assert!(can_afford_next_bid(Some(&team(1000.0)), None, Some(&p), 100.0));
        assert!(!can_afford_next_bid(Some(&team(999.0)), None, Some(&p), 100.0));
    }

    #[test]
    fn leader_is_never_blocked() {
        let p = player(1000.0);
        let bid = Bid::new("b1", "t1", 5000.0);
        assert!(can_afford_next_bid(Some(&team(0.0)), Some(&bid), Some(&p), 100.0));
    }

    #[test]
    fn outbid_requires_increment() {
        let p = player(500.0);
        let bid = Bid::new("b1", "t2", 1000.0);
        assert!(can_afford_next_bid(Some(&team(1100.0)), Some(&bid), Some(&p), 100.0));
        assert!(!can_afford_next_bid(Some(&team(1099.0)), Some(&bid), Some(&p), 100.0));
        // A bigger increment raises the bar for the same wallet.
        assert!(!can_afford_next_bid(Some(&team(1100.0)), Some(&bid), Some(&p), 250.0));
    }
}
