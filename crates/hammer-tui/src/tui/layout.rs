// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +--------------------------------------------------+
// | Lot Card (6 rows)                                 |
// +-------------------------+------------------------+
// | Teams (60%)              | Team Dashboard (40%)   |
// +-------------------------+------------------------+
// | Notifications (5 rows)                            |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Feed status, revision, countdown.
    pub status_bar: Rect,
    /// The player under the hammer and the current bid.
    pub lot_card: Rect,
    /// Every team with its bid state.
    pub teams: Rect,
    /// Detail panel for the selected team.
    pub team_dashboard: Rect,
    pub notifications: Rect,
    /// Keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    // Vertical: status(1) | lot(6) | middle(fill) | notifications(5) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(6),
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(vertical[2]);

    AppLayout {
        status_bar: vertical[0],
        lot_card: vertical[1],
        teams: horizontal[0],
        team_dashboard: horizontal[1],
        notifications: vertical[3],
        help_bar: vertical[4],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
