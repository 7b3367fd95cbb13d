//! Transient user notifications ("toasts").
//!
//! The store raises a [`Notification`] after adding an item, after a
//! successful order, and when checkout is refused. Notifiers decide how to
//! surface them: [`TracingNotifier`] just logs, [`NotificationQueue`] holds
//! them for a front end until their display time runs out.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use royal_cafe_core::NotificationLevel;

/// How long a toast stays on screen unless configured otherwise.
pub const DEFAULT_DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// A message for the user with a severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
}

impl Notification {
    #[must_use]
    pub fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Error)
    }
}

/// Receives notifications raised by the cart store.
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Notifier that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, notification: Notification) {
        match notification.level {
            NotificationLevel::Error => {
                tracing::warn!(message = %notification.message, "User notification");
            }
            level => {
                tracing::info!(%level, message = %notification.message, "User notification");
            }
        }
    }
}

/// A queued notification together with its expiry.
#[derive(Debug, Clone)]
pub struct ActiveNotification {
    pub notification: Notification,
    pub expires_at: Instant,
}

impl ActiveNotification {
    /// Time left on screen at `now`.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}

/// Holds notifications until they expire.
///
/// Expired entries are dropped whenever the queue is read, so a reader never
/// sees a notification past its display time.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    display_duration: Duration,
    entries: VecDeque<ActiveNotification>,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_DURATION)
    }
}

impl NotificationQueue {
    #[must_use]
    pub const fn new(display_duration: Duration) -> Self {
        Self {
            display_duration,
            entries: VecDeque::new(),
        }
    }

    #[must_use]
    pub const fn display_duration(&self) -> Duration {
        self.display_duration
    }

    /// Queue a notification as if raised at `now`.
    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        self.entries.push_back(ActiveNotification {
            notification,
            expires_at: now + self.display_duration,
        });
    }

    /// Remove and return every notification still on screen at `now`,
    /// oldest first.
    ///
    /// Front ends that hand toasts to a client which runs its own dismiss
    /// timer use this so each toast is delivered once.
    pub fn drain_at(&mut self, now: Instant) -> Vec<ActiveNotification> {
        self.prune(now);
        self.entries.drain(..).collect()
    }

    fn prune(&mut self, now: Instant) {
        self.entries.retain(|entry| entry.expires_at > now);
    }
}

impl Notifier for NotificationQueue {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(level = %notification.level, message = %notification.message, "Notification queued");
        self.push_at(notification, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_constructors_set_level() {
        assert_eq!(Notification::info("a").level, NotificationLevel::Info);
        assert_eq!(Notification::success("b").level, NotificationLevel::Success);
        assert_eq!(Notification::error("c").level, NotificationLevel::Error);
    }

    #[test]
    fn test_queue_keeps_notification_until_expiry() {
        let start = Instant::now();
        let mut queue = NotificationQueue::new(Duration::from_secs(3));
        queue.push_at(Notification::success("added"), start);
        assert_eq!(queue.drain_at(start + Duration::from_secs(2)).len(), 1);

        queue.push_at(Notification::success("added"), start);
        assert!(queue.drain_at(start + Duration::from_secs(3)).is_empty());
    }

    #[test]
    fn test_queue_expires_oldest_first() {
        let start = Instant::now();
        let mut queue = NotificationQueue::new(Duration::from_secs(3));
        queue.push_at(Notification::info("first"), start);
        queue.push_at(Notification::info("second"), start + Duration::from_secs(2));

        let messages: Vec<_> = queue
            .drain_at(start + Duration::from_secs(4))
            .into_iter()
            .map(|entry| entry.notification.message)
            .collect();
        assert_eq!(messages, vec!["second".to_string()]);
    }

    #[test]
    fn test_drain_delivers_once() {
        let start = Instant::now();
        let mut queue = NotificationQueue::default();
        queue.push_at(Notification::error("empty"), start);

        let drained = queue.drain_at(start);
        assert_eq!(drained.len(), 1);
        assert_eq!(drained[0].remaining(start), DEFAULT_DISPLAY_DURATION);
        assert!(queue.drain_at(start).is_empty());
    }
}
