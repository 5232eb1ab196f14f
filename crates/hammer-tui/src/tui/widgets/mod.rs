// TUI widget modules for each dashboard panel.

pub mod lot_card;
pub mod notifications;
pub mod status_bar;
pub mod team_dashboard;
pub mod teams;

use hammer_core::bidding::BidState;
use ratatui::style::Color;

/// Badge color for a bid state, shared by the teams table and team panel.
pub fn state_color(state: BidState) -> Color {
    match state {
        BidState::Winning => Color::Green,
        BidState::OutbidAffordable => Color::Yellow,
        BidState::OutbidUnaffordable => Color::Red,
        BidState::OpenAffordable => Color::Cyan,
        BidState::OpenUnaffordable => Color::Magenta,
        BidState::Inactive => Color::DarkGray,
    }
}
