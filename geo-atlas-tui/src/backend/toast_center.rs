use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use geo_atlas_core::{Notification, Notifier, Severity};

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

const MAX_TOASTS: usize = 5;

/// A notification with its arrival time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub severity: Severity,
    pub message: String,
    pub created: Instant,
}

/// Notifier that keeps recent notifications for the status bar.
///
/// Written from runtime worker threads, read by the draw loop.
#[derive(Debug, Default)]
pub struct ToastCenter {
    toasts: Mutex<VecDeque<Toast>>,
}

impl ToastCenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Newest toast still on screen.
    pub fn latest(&self) -> Option<Toast> {
        self.lock().back().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops toasts older than [`TOAST_TTL`] at `now`.
    pub fn expire(&self, now: Instant) {
        self.lock()
            .retain(|t| now.saturating_duration_since(t.created) < TOAST_TTL);
    }

    pub fn dismiss_all(&self) {
        self.lock().clear();
    }

    fn push_at(&self, notification: Notification, created: Instant) {
        let mut toasts = self.lock();
        toasts.push_back(Toast {
            severity: notification.severity,
            message: notification.message,
            created,
        });
        while toasts.len() > MAX_TOASTS {
            toasts.pop_front();
        }
    }
}

impl Notifier for ToastCenter {
    fn notify(&self, notification: Notification) {
        log::debug!(
            "Toast [{:?}] {}",
            notification.severity,
            notification.message
        );
        self.push_at(notification, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_is_the_newest_toast() {
        let center = ToastCenter::new();
        center.success("Country created successfully");
        center.error("Name is required");

        let latest = center.latest().map(|t| (t.severity, t.message));
        assert_eq!(
            latest,
            Some((Severity::Error, "Name is required".to_string()))
        );
        assert_eq!(center.len(), 2);
    }

    #[test]
    fn toasts_expire_after_ttl() {
        let center = ToastCenter::new();
        let start = Instant::now();
        center.push_at(Notification::info("old"), start);
        center.push_at(Notification::info("fresh"), start + Duration::from_secs(3));

        center.expire(start + TOAST_TTL + Duration::from_millis(1));
        assert_eq!(center.latest().map(|t| t.message), Some("fresh".to_string()));
        assert_eq!(center.len(), 1);

        center.expire(start + Duration::from_secs(60));
        assert!(center.latest().is_none());
    }

    #[test]
    fn only_the_most_recent_toasts_are_kept() {
        let center = ToastCenter::new();
        for i in 0..8 {
            center.success(&format!("toast {i}"));
        }
        assert_eq!(center.len(), MAX_TOASTS);
        assert_eq!(center.latest().map(|t| t.message), Some("toast 7".to_string()));

        center.dismiss_all();
        assert_eq!(center.len(), 0);
    }
}
