// Team records and their wallet bookkeeping.

use serde::{Deserialize, Serialize};

use super::Amount;

/// Wallet every team starts with when the record does not say otherwise.
pub const DEFAULT_INITIAL_WALLET: Amount = 10_000.0;

fn default_initial_wallet() -> Amount {
    DEFAULT_INITIAL_WALLET
}

/// A team participating in the auction.
///
/// `wallet` is required: a record without one fails to deserialize rather
/// than being silently treated as broke or as full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    /// Current spendable balance.
    pub wallet: Amount,
    /// Balance at auction start.
    #[serde(default = "default_initial_wallet")]
    pub initial_wallet: Amount,
    /// Ids of players won so far, in purchase order.
    #[serde(default)]
    pub players: Vec<String>,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, wallet: Amount) -> Self {
        Team {
            id: id.into(),
            name: name.into(),
            wallet,
            initial_wallet: DEFAULT_INITIAL_WALLET,
            players: Vec::new(),
        }
    }

    pub fn with_initial_wallet(mut self, initial_wallet: Amount) -> Self {
        self.initial_wallet = initial_wallet;
        self
    }

    /// Total spent since the auction started.
    pub fn total_spent(&self) -> Amount {
        self.initial_wallet - self.wallet
    }

    /// Percentage of the starting wallet still available, 0 when the team
    /// started with nothing.
    pub fn wallet_remaining_pct(&self) -> f64 {
        if self.initial_wallet > 0.0 {
            self.wallet / self.initial_wallet * 100.0
        } else {
            0.0
        }
    }

    pub fn squad_size(&self) -> usize {
        self.players.len()
    }
}
