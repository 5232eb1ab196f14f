// Auction-wide settings supplied by the settings store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Amount;

/// Smallest increment the settings store may configure.
pub const MIN_BID_INCREMENT_FLOOR: Amount = 10.0;

/// Exclusive bounds of `unsold_price_reduction`.
pub const UNSOLD_REDUCTION_RANGE: (f64, f64) = (0.1, 1.0);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("minBidIncrement must be at least 10, got {0}")]
    IncrementTooSmall(Amount),

    #[error("unsoldPriceReduction must be between 0.1 and 1 (exclusive), got {0}")]
    ReductionOutOfRange(f64),
}

/// Read-only settings for the running auction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionSettings {
    /// Smallest step above the highest bid that a new bid must reach.
    pub min_bid_increment: Amount,
    /// When the auction starts, if scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auction_date: Option<DateTime<Utc>>,
    /// Fraction knocked off an unsold player's base price before re-auction.
    pub unsold_price_reduction: f64,
}

impl AuctionSettings {
    pub fn new(min_bid_increment: Amount, unsold_price_reduction: f64) -> Self {
        AuctionSettings {
            min_bid_increment,
            auction_date: None,
            unsold_price_reduction,
        }
    }

    /// Check the ranges the settings store is supposed to enforce.
    pub fn validate(&self) -> Result<(), SettingsError> {
        // Negated comparisons so NaN fails too.
        if !(self.min_bid_increment >= MIN_BID_INCREMENT_FLOOR) {
            return Err(SettingsError::IncrementTooSmall(self.min_bid_increment));
        }
        let (lo, hi) = UNSOLD_REDUCTION_RANGE;
        if !(self.unsold_price_reduction > lo && self.unsold_price_reduction < hi) {
            return Err(SettingsError::ReductionOutOfRange(
                self.unsold_price_reduction,
            ));
        }
        Ok(())
    }
}

/// Base price for an unsold player going back under the hammer.
///
/// The configured fraction is taken off the previous base price and the
/// result is rounded to a whole currency unit.
pub fn reduced_base_price(base_price: Amount, settings: &AuctionSettings) -> Amount {
    (base_price * (1.0 - settings.unsold_price_reduction)).round()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_settings_pass() {
        assert!(AuctionSettings::new(100.0, 0.25).validate().is_ok());
        assert!(AuctionSettings::new(10.0, 0.5).validate().is_ok());
    }

    #[test]
    fn rejects_small_increment() {
        let err = AuctionSettings::new(5.0, 0.25).validate().unwrap_err();
        assert_eq!(err, SettingsError::IncrementTooSmall(5.0));
        assert!(AuctionSettings::new(f64::NAN, 0.25).validate().is_err());
    }

    #[test]
    fn rejects_reduction_on_or_outside_bounds() {
        for bad in [0.1, 1.0, 0.05, 1.5, f64::NAN] {
            let result = AuctionSettings::new(100.0, bad).validate();
            assert!(
                matches!(result, Err(SettingsError::ReductionOutOfRange(_))),
                "expected {bad} to be rejected"
            );
        }
    }

    #[test]
    fn reduced_base_price_rounds() {
        let settings = AuctionSettings::new(100.0, 0.25);
        assert_eq!(reduced_base_price(1000.0, &settings), 750.0);
        assert_eq!(reduced_base_price(333.0, &settings), 250.0);
    }

    #[test]
    fn deserializes_optional_date() {
        let settings: AuctionSettings = serde_json::from_str(
            r#"{"minBidIncrement": 50, "unsoldPriceReduction": 0.2, "auctionDate": "2026-04-01T09:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(settings.min_bid_increment, 50.0);
        assert!(settings.auction_date.is_some());

        let no_date: AuctionSettings =
            serde_json::from_str(r#"{"minBidIncrement": 50, "unsoldPriceReduction": 0.2}"#)
                .unwrap();
        assert!(no_date.auction_date.is_none());
    }
}
