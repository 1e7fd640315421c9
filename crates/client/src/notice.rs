//! Transient user-facing notices (toasts).
//!
//! Notices auto-dismiss after a fixed interval; the UI polls
//! [`Notice::is_expired`] or just re-renders on each published notice.

use std::time::{Duration, Instant};

use crate::subscription::{Subscribers, SubscriptionId};

/// How long a notice stays on screen.
pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A single toast message.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    pub posted_at: Instant,
}

impl Notice {
    #[must_use]
    pub fn new(message: impl Into<String>, level: NoticeLevel) -> Self {
        Self {
            message: message.into(),
            level,
            posted_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.posted_at.elapsed() >= DISMISS_AFTER
    }
}

/// Fans notices out to whatever UI surface is listening.
#[derive(Debug, Default)]
pub struct NoticeBus {
    subscribers: Subscribers<Notice>,
}

impl NoticeBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.post(Notice::new(message, NoticeLevel::Info));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.post(Notice::new(message, NoticeLevel::Success));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.post(Notice::new(message, NoticeLevel::Error));
    }

    pub fn post(&mut self, notice: Notice) {
        self.subscribers.publish(&notice);
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&Notice) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}
