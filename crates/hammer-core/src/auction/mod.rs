// Auction records: players, teams, bids, settings and the snapshot that ties
// them together.

pub mod bid;
pub mod player;
pub mod settings;
pub mod snapshot;
pub mod team;

/// Money amounts as stored by the backend (whole currency units, but kept as
/// floating point so inconsistent upstream data stays visible).
pub type Amount = f64;
