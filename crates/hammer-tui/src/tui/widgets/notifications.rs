// Notifications widget: the live entries of the notification centre,
// newest first.

use hammer_core::notify::{Notification, NotificationLevel};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the notifications strip into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let visible = (area.height as usize).saturating_sub(2);
    let lines: Vec<Line> = if state.notifications.is_empty() {
        vec![Line::from(Span::styled(
            " Nothing new",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        state
            .notifications
            .iter()
            .rev()
            .take(visible.max(1))
            .map(notification_line)
            .collect()
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Notifications"),
    );
    frame.render_widget(paragraph, area);
}

fn notification_line(note: &Notification) -> Line<'static> {
    let (tag, color) = level_tag(note.level);
    Line::from(vec![
        Span::styled(format!(" {tag} "), Style::default().fg(color)),
        Span::styled(note.message.clone(), Style::default().fg(Color::White)),
    ])
}

/// Short tag and color for a notification level.
pub fn level_tag(level: NotificationLevel) -> (&'static str, Color) {
    match level {
        NotificationLevel::Info => ("i", Color::Cyan),
        NotificationLevel::Success => ("✓", Color::Green),
        NotificationLevel::Warning => ("!", Color::Yellow),
        NotificationLevel::Error => ("x", Color::Red),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
