// Bid evaluation: validation, affordability, wallet projection and the
// per-team bid state shown by the dashboard.

pub mod affordability;
pub mod classifier;
pub mod evaluation;
pub mod validator;
pub mod wallet;

pub use affordability::can_afford_next_bid;
pub use classifier::{classify_bid_state, BidState};
pub use evaluation::{evaluate_all, evaluate_team, TeamEvaluation};
pub use validator::{check_bid, minimum_next_bid, parse_bid_input, validate_bid, BidError};
pub use wallet::{project_wallet, project_wallet_after_win, WalletProjection};
