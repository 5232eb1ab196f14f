// The current highest bid on the open lot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Amount;

/// The highest accepted bid for the lot currently open.
///
/// The backend accepts bids; this record is only ever read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub id: String,
    pub team_id: String,
    pub amount: Amount,
    pub timestamp: DateTime<Utc>,
}

impl Bid {
    pub fn new(id: impl Into<String>, team_id: impl Into<String>, amount: Amount) -> Self {
        Bid {
            id: id.into(),
            team_id: team_id.into(),
            amount,
            timestamp: Utc::now(),
        }
    }

    /// Whether this bid was placed by the given team.
    pub fn is_by(&self, team_id: &str) -> bool {
        self.team_id == team_id
    }
}
