// Notification log and loading flags for the rendering layer.
//
// Both containers are owned by whoever renders and passed around
// explicitly. Notifications are appended in arrival order and expire after a
// fixed time-to-live, oldest first.

use std::collections::{BTreeSet, VecDeque};
use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Monotonic id, unique for the lifetime of the centre.
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.created_at) >= ttl
    }
}

/// Append-only notification log with time-boxed expiry.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    entries: VecDeque<Notification>,
    ttl: Duration,
    /// Upper bound on live entries; the oldest is evicted past it.
    capacity: usize,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        NotificationCenter {
            entries: VecDeque::new(),
            ttl,
            capacity: capacity.max(1),
            next_id: 1,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Append a notification and return its id.
    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push_back(Notification {
            id,
            level,
            message: message.into(),
            created_at: now,
        });
        while self.entries.len() > self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                debug!("Evicted notification #{} over capacity", evicted.id);
            }
        }
        id
    }

    /// Drop every expired entry, oldest first. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let mut removed = 0;
        while let Some(front) = self.entries.front() {
            if !front.is_expired(now, self.ttl) {
                break;
            }
            self.entries.pop_front();
            removed += 1;
        }
        if removed > 0 {
            debug!("Expired {} notification(s)", removed);
        }
        removed
    }

    /// Live notifications, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Named operations currently in flight.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlags {
    active: BTreeSet<String>,
}

impl LoadingFlags {
    pub fn begin(&mut self, name: &str) {
        self.active.insert(name.to_string());
    }

    pub fn end(&mut self, name: &str) {
        self.active.remove(name);
    }

    pub fn is_loading(&self, name: &str) -> bool {
        self.active.contains(name)
    }

    pub fn any(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(String::as_str)
    }
}
