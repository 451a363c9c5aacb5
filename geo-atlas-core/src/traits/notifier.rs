//! Notification sink Trait

use crate::types::Notification;

/// Receives user-facing notifications.
///
/// The shell decides how to present them (toasts in the terminal console,
/// a recording list in tests). Implementations must not block.
pub trait Notifier: Send + Sync {
    /// Presents a notification.
    fn notify(&self, notification: Notification);

    /// Shortcut for a success toast.
    fn success(&self, message: &str) {
        self.notify(Notification::success(message));
    }

    /// Shortcut for an error toast.
    fn error(&self, message: &str) {
        self.notify(Notification::error(message));
    }
}
