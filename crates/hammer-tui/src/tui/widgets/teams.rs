// Teams widget: every team with its bid state against the open lot.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use hammer_core::format::{format_percent, truncate_text};

use super::state_color;
use crate::tui::ViewState;

const NAME_WIDTH: usize = 22;

/// Render the teams overview into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let header = Row::new(vec![
        Cell::from("Team"),
        Cell::from("State"),
        Cell::from("Wallet"),
        Cell::from("Left"),
        Cell::from("Squad"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let selected = state.selected_index();
    let rows: Vec<Row> = match &state.dashboard {
        Some(dashboard) if !dashboard.teams.is_empty() => dashboard
            .teams
            .iter()
            .enumerate()
            .map(|(idx, team)| {
                let mut row = Row::new(vec![
                    Cell::from(team_label(&team.team_name, state.is_my_team(&team.team_id))),
                    Cell::from(team.state.label())
                        .style(Style::default().fg(state_color(team.state))),
                    Cell::from(state.money.amount(team.wallet.current)),
                    Cell::from(format_percent(team.wallet_remaining_pct)),
                    Cell::from(team.squad_size.to_string()),
                ]);
                if selected == Some(idx) {
                    row = row.style(Style::default().add_modifier(Modifier::REVERSED));
                }
                row
            })
            .collect(),
        _ => vec![Row::new(vec![Cell::from("  No team data available")])],
    };

    let widths = [
        Constraint::Min(16),
        Constraint::Length(13),
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Teams"));
    frame.render_widget(table, area);
}

/// Truncated team name, starred for the home team.
pub fn team_label(name: &str, mine: bool) -> String {
    let name = truncate_text(name, NAME_WIDTH);
    if mine {
        format!("* {name}")
    } else {
        format!("  {name}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::fixtures::sample_dashboard;

    #[test]
    fn team_label_marks_and_truncates() {
        assert_eq!(team_label("Chennai Kings", true), "* Chennai Kings");
        assert_eq!(team_label("Chennai Kings", false), "  Chennai Kings");
        assert_eq!(
            team_label("Royal Challengers Bangalore", false),
            "  Royal Challengers B..."
        );
    }

    #[test]
    fn render_does_not_panic_empty() {
        let backend = ratatui::backend::TestBackend::new(80, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_teams() {
        let backend = ratatui::backend::TestBackend::new(80, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.dashboard = Some(sample_dashboard());
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
