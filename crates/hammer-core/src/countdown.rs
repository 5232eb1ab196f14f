// Countdown to the scheduled auction start.
//
// `time_remaining` is the pure derivation; `Countdown` re-runs it on a fixed
// interval and pushes each value to the renderer. Dropping or cancelling the
// handle aborts the task, so a torn-down view never receives stale ticks.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRemaining {
    Pending {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Elapsed,
}

impl TimeRemaining {
    pub fn is_elapsed(&self) -> bool {
        matches!(self, TimeRemaining::Elapsed)
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRemaining::Pending {
                days,
                hours,
                minutes,
                seconds,
            } => {
                if *days > 0 {
                    write!(f, "{days}d {hours:02}h {minutes:02}m {seconds:02}s")
                } else {
                    write!(f, "{hours:02}h {minutes:02}m {seconds:02}s")
                }
            }
            TimeRemaining::Elapsed => write!(f, "Live"),
        }
    }
}

/// Time left until `target`, truncated to whole seconds.
pub fn time_remaining(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeRemaining {
    let total = (target - now).num_seconds();
    if total <= 0 {
        return TimeRemaining::Elapsed;
    }
    TimeRemaining::Pending {
        days: total / 86_400,
        hours: (total % 86_400) / 3_600,
        minutes: (total % 3_600) / 60,
        seconds: total % 60,
    }
}

/// Handle to a running countdown task. Aborts the task on drop.
#[derive(Debug)]
pub struct Countdown {
    task: JoinHandle<()>,
}

impl Countdown {
    /// Start recomputing the time left until `target` every `interval`.
    ///
    /// The first value is sent immediately. The task stops by itself after
    /// sending [`TimeRemaining::Elapsed`] or when the receiver goes away.
    pub fn spawn<C>(
        target: DateTime<Utc>,
        interval: Duration,
        clock: C,
        tx: mpsc::Sender<TimeRemaining>,
    ) -> Self
    where
        C: Fn() -> DateTime<Utc> + Send + 'static,
    {
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                let remaining = time_remaining(target, clock());
                if tx.send(remaining).await.is_err() {
                    debug!("Countdown receiver dropped, stopping");
                    break;
                }
                if remaining.is_elapsed() {
                    debug!("Countdown reached {}", target);
                    break;
                }
            }
        });
        Countdown { task }
    }

    /// Stop the countdown now.
    pub fn cancel(self) {
        // Drop does the work.
    }
}

impl Drop for Countdown {
    fn drop(&mut self) {
        self.task.abort();
    }
}
