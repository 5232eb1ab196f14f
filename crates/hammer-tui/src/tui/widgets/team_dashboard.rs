// Team dashboard widget: bid state and wallet for the selected team.
//
// Badge + description on top, then key-value rows:
// Wallet, If won, Spent, Spent if won, Remaining %, Squad, Next bid

use hammer_core::bidding::TeamEvaluation;
use hammer_core::format::format_percent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::state_color;
use crate::config::MoneyFormat;
use crate::tui::ViewState;

/// Render the selected team's panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (title, lines) = match state.selected_evaluation() {
        Some(eval) => {
            let marker = if state.is_my_team(&eval.team_id) { " (you)" } else { "" };
            (
                format!("{}{marker}", eval.team_name),
                build_team_lines(eval, &state.money),
            )
        }
        None => (
            "Team".to_string(),
            vec![Line::from(Span::styled(
                " No team data yet",
                Style::default().fg(Color::DarkGray),
            ))],
        ),
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn row(label: &'static str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::styled(value, style),
    ])
}

fn build_team_lines(eval: &TeamEvaluation, money: &MoneyFormat) -> Vec<Line<'static>> {
    let white = Style::default().fg(Color::White);
    let color = state_color(eval.state);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", eval.state.label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", eval.state.description()), Style::default().fg(color)),
        ]),
        Line::from(""),
        row(
            " Wallet:       ",
            money.amount(eval.wallet.current),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        row(" If won:       ", money.amount(eval.wallet.projected), white),
        row(" Spent:        ", money.amount(eval.wallet.spent_to_date), white),
        row(" Spent if won: ", money.amount(eval.wallet.spent_if_won), white),
        row(
            " Remaining:    ",
            format_percent(eval.wallet_remaining_pct),
            Style::default().fg(remaining_color(eval.wallet_remaining_pct)),
        ),
        row(" Squad:        ", eval.squad_size.to_string(), white),
    ];

    if let Some(next) = eval.minimum_next_bid {
        let (text, style) = if eval.can_afford {
            (money.amount(next), white)
        } else {
            (format!("{} (out of reach)", money.amount(next)), Style::default().fg(Color::Red))
        };
        lines.push(row(" Next bid:     ", text, style));
    }

    lines
}

/// Green above half the purse, yellow above a fifth, red below.
pub fn remaining_color(pct: f64) -> Color {
    if pct > 50.0 {
        Color::Green
    } else if pct > 20.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
