// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors what the app orchestrator last
// sent. Updates arrive as `UiUpdate` messages over an mpsc channel; the TUI
// applies them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use hammer_core::bidding::TeamEvaluation;
use hammer_core::countdown::TimeRemaining;
use hammer_core::notify::{LoadingFlags, NotificationCenter};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::config::MoneyFormat;
use crate::protocol::{DashboardSnapshot, FeedStatus, UiUpdate, UserCommand};

use layout::build_layout;

/// Loading flag raised until the first snapshot arrives.
pub const FEED_LOADING: &str = "feed";

const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(6);
const DEFAULT_NOTIFICATION_CAPACITY: usize = 5;

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
pub struct ViewState {
    /// Latest evaluated board, if any snapshot arrived yet.
    pub dashboard: Option<DashboardSnapshot>,
    pub feed_status: FeedStatus,
    /// Time left until the scheduled auction start.
    pub countdown: Option<TimeRemaining>,
    pub notifications: NotificationCenter,
    pub loading: LoadingFlags,
    /// Index into `dashboard.teams` of the team shown in the detail panel.
    /// `None` follows the configured home team.
    pub selected_team: Option<usize>,
    pub money: MoneyFormat,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(
            MoneyFormat::default(),
            NotificationCenter::new(DEFAULT_NOTIFICATION_TTL, DEFAULT_NOTIFICATION_CAPACITY),
        )
    }
}

impl ViewState {
    pub fn new(money: MoneyFormat, notifications: NotificationCenter) -> Self {
        let mut loading = LoadingFlags::default();
        loading.begin(FEED_LOADING);
        ViewState {
            dashboard: None,
            feed_status: FeedStatus::Waiting,
            countdown: None,
            notifications,
            loading,
            selected_team: None,
            money,
        }
    }

    pub fn team_count(&self) -> usize {
        self.dashboard.as_ref().map_or(0, |d| d.teams.len())
    }

    /// Resolved index of the team in the detail panel.
    pub fn selected_index(&self) -> Option<usize> {
        let dashboard = self.dashboard.as_ref()?;
        if dashboard.teams.is_empty() {
            return None;
        }
        match self.selected_team {
            Some(idx) => Some(idx.min(dashboard.teams.len() - 1)),
            None => Some(
                dashboard
                    .my_team
                    .as_deref()
                    .and_then(|id| dashboard.team_index(id))
                    .unwrap_or(0),
            ),
        }
    }

    pub fn selected_evaluation(&self) -> Option<&TeamEvaluation> {
        let idx = self.selected_index()?;
        self.dashboard.as_ref()?.teams.get(idx)
    }

    /// Whether `team_id` is the configured home team.
    pub fn is_my_team(&self, team_id: &str) -> bool {
        self.dashboard
            .as_ref()
            .and_then(|d| d.my_team.as_deref())
            == Some(team_id)
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate, now: Instant) {
    match update {
        UiUpdate::Snapshot(dashboard) => {
            state.loading.end(FEED_LOADING);
            state.dashboard = Some(*dashboard);
        }
        UiUpdate::Notify { level, message } => {
            state.notifications.push(level, message, now);
        }
        UiUpdate::FeedStatus(status) => {
            if let FeedStatus::Error(_) = status {
                state.loading.end(FEED_LOADING);
            }
            state.feed_status = status;
        }
        UiUpdate::Countdown(remaining) => {
            state.countdown = remaining;
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::lot_card::render(frame, layout.lot_card, state);
    widgets::teams::render(frame, layout.teams, state);
    widgets::team_dashboard::render(frame, layout.team_dashboard, state);
    widgets::notifications::render(frame, layout.notifications, state);
    render_help_bar(frame, layout.help_bar);
}

fn render_help_bar(frame: &mut Frame, area: ratatui::layout::Rect) {
    let text = " q:Quit | j/k:Select team | g:My team";
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    mut view_state: ViewState,
) -> anyhow::Result<()> {
    // 1. Initialize terminal
    let mut terminal = ratatui::init();

    // 2. Chain a restoring panic hook in front of the original one
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 3. Async keyboard input and a ~30fps render tick
    let mut event_stream = EventStream::new();
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // 4. Main loop
    let result = loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update, Instant::now()),
                    None => {
                        info!("UI channel closed");
                        break Ok(());
                    }
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            let _ = cmd_tx.send(cmd).await;
                            if quit {
                                break Ok(());
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => break Err(anyhow::Error::new(e).context("terminal input error")),
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                let expired = view_state.notifications.expire(Instant::now());
                if expired > 0 {
                    debug!("{} notification(s) expired", expired);
                }
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(anyhow::Error::new(e).context("failed to draw frame"));
                }
            }
        }
    };

    // 5. Restore terminal
    ratatui::restore();

    result
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::DashboardSnapshot;

    pub(crate) fn sample_dashboard() -> DashboardSnapshot {
        use hammer_core::auction::snapshot::AuctionSnapshot;
        let snapshot: AuctionSnapshot = serde_json::from_str(
            r#"{
                "revision": 4,
                "settings": {"minBidIncrement": 100, "unsoldPriceReduction": 0.25},
                "teams": [
                    {"id": "t1", "name": "Chennai Kings", "wallet": 7400},
                    {"id": "t2", "name": "Mumbai Titans", "wallet": 6100},
                    {"id": "t3", "name": "Delhi Capitals", "wallet": 900}
                ],
                "currentPlayer": {"id": "p9", "name": "Hardik Pandya", "role": "All-rounder", "basePrice": 1000,
                                  "stats": {"matches": 123, "strikeRate": 145.9}},
                "highestBid": {"id": "b1", "teamId": "t2", "amount": 1400, "timestamp": "2026-03-14T10:15:00Z"}
            }"#,
        )
        .unwrap();
        crate::app::build_dashboard(&snapshot, Some("t2"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use super::fixtures::sample_dashboard;
    use hammer_core::notify::NotificationLevel;

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert!(state.dashboard.is_none());
        assert_eq!(state.feed_status, FeedStatus::Waiting);
        assert!(state.countdown.is_none());
        assert!(state.notifications.is_empty());
        assert!(state.loading.is_loading(FEED_LOADING));
        assert!(state.selected_index().is_none());
        assert_eq!(state.team_count(), 0);
    }

    #[test]
    fn snapshot_clears_loading_and_selects_my_team() {
        let mut state = ViewState::default();
        apply_ui_update(
            &mut state,
            UiUpdate::Snapshot(Box::new(sample_dashboard())),
            Instant::now(),
        );
        assert!(!state.loading.any());
        assert_eq!(state.selected_index(), Some(1));
        assert!(state.is_my_team("t2"));
        assert_eq!(state.selected_evaluation().unwrap().team_name, "Mumbai Titans");
    }

    #[test]
    fn explicit_selection_is_clamped() {
        let mut state = ViewState::default();
        state.dashboard = Some(sample_dashboard());
        state.selected_team = Some(10);
        assert_eq!(state.selected_index(), Some(2));
    }

    #[test]
    fn notify_and_feed_status_updates() {
        let mut state = ViewState::default();
        let now = Instant::now();
        apply_ui_update(
            &mut state,
            UiUpdate::Notify {
                level: NotificationLevel::Warning,
                message: "You have been outbid".into(),
            },
            now,
        );
        assert_eq!(state.notifications.len(), 1);

        apply_ui_update(&mut state, UiUpdate::FeedStatus(FeedStatus::Error("x".into())), now);
        assert_eq!(state.feed_status, FeedStatus::Error("x".into()));
        assert!(!state.loading.is_loading(FEED_LOADING));
    }

    #[test]
    fn countdown_update() {
        let mut state = ViewState::default();
        apply_ui_update(&mut state, UiUpdate::Countdown(Some(TimeRemaining::Elapsed)), Instant::now());
        assert_eq!(state.countdown, Some(TimeRemaining::Elapsed));
        apply_ui_update(&mut state, UiUpdate::Countdown(None), Instant::now());
        assert!(state.countdown.is_none());
    }

    #[test]
    fn render_frame_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(120, 40);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();

        state.dashboard = Some(sample_dashboard());
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();
    }

    #[test]
    fn render_frame_tiny_terminal() {
        let backend = ratatui::backend::TestBackend::new(20, 6);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.dashboard = Some(sample_dashboard());
        terminal.draw(|frame| render_frame(frame, &state)).unwrap();
    }
}
