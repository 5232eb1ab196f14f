// Status bar widget: feed health, revision, countdown to the auction start.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use hammer_core::countdown::TimeRemaining;

use crate::protocol::FeedStatus;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [feed indicator] [revision] [countdown] [loading]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (dot, label, color) = feed_indicator(&state.feed_status);
    let mut spans = vec![
        Span::styled(format!(" {dot} "), Style::default().fg(color)),
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ];

    if let Some(dashboard) = &state.dashboard {
        spans.push(separator());
        spans.push(Span::styled(
            format!("Rev {}", dashboard.revision),
            Style::default().fg(Color::White),
        ));
        spans.push(separator());
        spans.push(Span::styled(
            format!("Min raise {}", state.money.amount(dashboard.min_bid_increment)),
            Style::default().fg(Color::White),
        ));
    }

    if let Some(remaining) = state.countdown {
        spans.push(separator());
        spans.push(Span::styled(
            countdown_text(remaining),
            Style::default().fg(countdown_color(remaining)),
        ));
    }

    if state.loading.any() {
        let names: Vec<&str> = state.loading.names().collect();
        spans.push(separator());
        spans.push(Span::styled(
            format!("Loading {}...", names.join(", ")),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

fn separator() -> Span<'static> {
    Span::styled(" | ", Style::default().fg(Color::Gray))
}

/// Dot, label and color for the feed status.
pub fn feed_indicator(status: &FeedStatus) -> (&'static str, &'static str, Color) {
    match status {
        FeedStatus::Waiting => ("○", "WAITING", Color::Yellow),
        FeedStatus::Live => ("●", "LIVE", Color::Green),
        FeedStatus::Error(_) => ("●", "FEED ERROR", Color::Red),
    }
}

pub fn countdown_text(remaining: TimeRemaining) -> String {
    match remaining {
        TimeRemaining::Elapsed => "Auction live".to_string(),
        pending => format!("Starts in {pending}"),
    }
}

fn countdown_color(remaining: TimeRemaining) -> Color {
    match remaining {
        TimeRemaining::Elapsed => Color::Green,
        TimeRemaining::Pending { days: 0, hours: 0, .. } => Color::Yellow,
        TimeRemaining::Pending { .. } => Color::White,
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
    fn feed_indicator_values() {
        assert_eq!(feed_indicator(&FeedStatus::Live), ("●", "LIVE", Color::Green));
        assert_eq!(feed_indicator(&FeedStatus::Waiting).2, Color::Yellow);
        assert_eq!(feed_indicator(&FeedStatus::Error("x".into())).1, "FEED ERROR");
    }

    #[test]
    fn countdown_text_values() {
        let pending = TimeRemaining::Pending {
            days: 0,
            hours: 0,
            minutes: 4,
            seconds: 5,
        };
        assert_eq!(countdown_text(pending), "Starts in 00h 04m 05s");
        assert_eq!(countdown_text(TimeRemaining::Elapsed), "Auction live");
        assert_eq!(countdown_color(pending), Color::Yellow);
    }

    #[test]
    fn render_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_does_not_panic_with_data() {
        let backend = ratatui::backend::TestBackend::new(100, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.dashboard = Some(sample_dashboard());
        state.feed_status = FeedStatus::Live;
        state.countdown = Some(TimeRemaining::Elapsed);
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
