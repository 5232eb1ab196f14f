// Bid amount validation.

use thiserror::Error;

use crate::auction::bid::Bid;
use crate::auction::player::Player;
use crate::auction::Amount;
use crate::validate::ValidationResult;

/// Field name that carries bid validation messages.
pub const AMOUNT_FIELD: &str = "amount";

/// Why a proposed bid cannot be submitted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BidError {
    #[error("Please enter a valid bid amount")]
    InvalidAmount,

    #[error("Bid must be at least {min_bid}")]
    BelowMinimum { min_bid: Amount },

    #[error("Bid exceeds your wallet balance of {wallet}")]
    InsufficientFunds { wallet: Amount },
}

/// Check a proposed bid.
///
/// Rules are applied in order and the first failure is returned: the amount
/// must be a finite non-negative number, at least `min_bid`, and no more
/// than `wallet_balance`.
pub fn check_bid(bid_amount: f64, min_bid: Amount, wallet_balance: Amount) -> Result<(), BidError> {
    if !bid_amount.is_finite() || bid_amount < 0.0 {
        return Err(BidError::InvalidAmount);
    }
    if bid_amount < min_bid {
        return Err(BidError::BelowMinimum { min_bid });
    }
    if bid_amount > wallet_balance {
        return Err(BidError::InsufficientFunds {
            wallet: wallet_balance,
        });
    }
    Ok(())
}

/// Map-shaped form of [`check_bid`] for inline rendering next to the amount
/// field.
pub fn validate_bid(bid_amount: f64, min_bid: Amount, wallet_balance: Amount) -> ValidationResult {
    match check_bid(bid_amount, min_bid, wallet_balance) {
        Ok(()) => ValidationResult::ok(),
        Err(e) => {
            let mut result = ValidationResult::ok();
            result.add(AMOUNT_FIELD, e.to_string());
            result
        }
    }
}

/// Parse raw bid input. Unparsable text becomes NaN so that validation
/// reports it as an invalid amount.
pub fn parse_bid_input(input: &str) -> f64 {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    cleaned.parse::<f64>().unwrap_or(f64::NAN)
}

/// Smallest amount a new bid on the open lot must reach.
///
/// `None` when no lot is open.
pub fn minimum_next_bid(
    highest_bid: Option<&Bid>,
    current_player: Option<&Player>,
    min_increment: Amount,
) -> Option<Amount> {
    let player = current_player?;
    Some(match highest_bid {
        Some(bid) => bid.amount + min_increment,
        None => player.base_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bid_within_bounds() {
        assert_eq!(check_bid(1100.0, 1100.0, 5000.0), Ok(()));
        assert_eq!(check_bid(5000.0, 1100.0, 5000.0), Ok(()));
        let result = validate_bid(1500.0, 1100.0, 5000.0);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn rejects_non_finite_and_negative() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0] {
            assert_eq!(check_bid(bad, 0.0, 1e9), Err(BidError::InvalidAmount));
        }
    }

    #[test]
    fn invalid_amount_short_circuits() {
        // NaN would also be "below minimum" and "above wallet" under a naive
        // check; only the first rule should report.
        let result = validate_bid(f64::NAN, 100.0, 0.0);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(
            result.message(AMOUNT_FIELD),
            Some("Please enter a valid bid amount")
        );
    }

    #[test]
    fn below_minimum_wins_over_insufficient_funds() {
        assert_eq!(
            check_bid(50.0, 100.0, 10.0),
            Err(BidError::BelowMinimum { min_bid: 100.0 })
        );
    }

    #[test]
    fn insufficient_funds_message() {
        let result = validate_bid(6000.0, 1100.0, 5000.0);
        assert_eq!(
            result.message(AMOUNT_FIELD),
            Some("Bid exceeds your wallet balance of 5000")
        );
    }

    #[test]
    fn below_minimum_message() {
        let result = validate_bid(900.0, 1100.0, 5000.0);
        assert_eq!(result.message(AMOUNT_FIELD), Some("Bid must be at least 1100"));
    }

    #[test]
    fn parse_bid_input_handles_grouping_and_garbage() {
        assert_eq!(parse_bid_input(" 1,500 "), 1500.0);
        assert_eq!(parse_bid_input("2_000"), 2000.0);
        assert_eq!(parse_bid_input("12.5"), 12.5);
        assert!(parse_bid_input("").is_nan());
        assert!(parse_bid_input("abc").is_nan());
        assert_eq!(
            check_bid(parse_bid_input("ten"), 0.0, 100.0),
            Err(BidError::InvalidAmount)
        );
    }

    #[test]
    fn minimum_next_bid_uses_base_price_or_increment() {
        let player = Player::new("p1", "Gill", 1000.0);
        assert_eq!(minimum_next_bid(None, Some(&player), 100.0), Some(1000.0));

        let bid = Bid::new("b1", "t2", 1400.0);
        assert_eq!(
            minimum_next_bid(Some(&bid), Some(&player), 100.0),
            Some(1500.0)
        );
        assert_eq!(minimum_next_bid(Some(&bid), None, 100.0), None);
    }
}
