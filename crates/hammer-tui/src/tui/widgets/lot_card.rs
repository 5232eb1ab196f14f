// Lot card widget: the player under the hammer and the state of bidding.
//
//  Hardik Pandya  [AR]  Available
//  Base ₹1,000  | Highest ₹1,400 (Mumbai Titans) | Next ₹1,500
//  M 123  SR 145.90  Wkts 64

use hammer_core::auction::player::{PlayerStats, StatKey};
use hammer_core::format::format_number;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::config::MoneyFormat;
use crate::protocol::LotInfo;
use crate::tui::ViewState;

/// Render the lot card into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let lot = state.dashboard.as_ref().and_then(|d| d.lot.as_ref());
    let lines = match lot {
        Some(lot) => build_lot_lines(lot, &state.money),
        None => vec![Line::from(Span::styled(
            " Waiting for the next player...",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Under the Hammer"),
    );
    frame.render_widget(paragraph, area);
}

fn build_lot_lines(lot: &LotInfo, money: &MoneyFormat) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White);

    let mut header = vec![Span::styled(
        format!(" {}", lot.player_name),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(role) = lot.role {
        header.push(Span::styled(
            format!("  [{}]", role.short_label()),
            Style::default().fg(Color::Yellow),
        ));
    }
    header.push(Span::styled(format!("  {}", lot.status.label()), label));

    let mut prices = vec![
        Span::styled(" Base ", label),
        Span::styled(money.amount(lot.base_price), value),
    ];
    if let Some(reduced) = lot.reduced_base_price {
        prices.push(Span::styled(
            format!(" (re-entry {})", money.amount(reduced)),
            Style::default().fg(Color::Magenta),
        ));
    }
    prices.push(Span::styled(" | Highest ", label));
    prices.push(Span::styled(
        highest_bid_text(lot, money),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    ));
    if !lot.biddable {
        prices.push(Span::styled(
            " | Bidding closed",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    } else if let Some(next) = lot.minimum_next_bid {
        prices.push(Span::styled(" | Next ", label));
        prices.push(Span::styled(money.amount(next), value));
    }

    let mut lines = vec![Line::from(header), Line::from(prices)];
    let stats = stats_line(&lot.stats);
    if !stats.is_empty() {
        lines.push(Line::from(Span::styled(format!(" {stats}"), value)));
    }
    lines
}

/// "₹1,400 (Mumbai Titans)" or "no bids".
pub fn highest_bid_text(lot: &LotInfo, money: &MoneyFormat) -> String {
    match (lot.highest_bid, lot.leading_team.as_deref()) {
        (Some(amount), Some(team)) => format!("{} ({team})", money.amount(amount)),
        (Some(amount), None) => money.amount(amount),
        (None, _) => "no bids".to_string(),
    }
}

/// Compact "M 123  SR 145.90" rendering of whatever stats are present.
pub fn stats_line(stats: &PlayerStats) -> String {
    StatKey::ALL
        .iter()
        .filter_map(|key| {
            stats
                .get(*key)
                .map(|v| format!("{} {}", key.label(), format_number(v, key.precision())))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
