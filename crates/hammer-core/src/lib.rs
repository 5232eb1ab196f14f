// Library root for the auction board core: records, bid evaluation,
// formatting, validation and the small state containers the dashboard
// injects into its view.

pub mod auction;
pub mod bidding;
pub mod countdown;
pub mod format;
pub mod notify;
pub mod validate;
