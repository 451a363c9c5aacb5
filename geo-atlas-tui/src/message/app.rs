use super::{ContentMessage, ModalMessage, NavigationMessage};
use crate::backend::BackendEvent;

/// Top-level message.
#[derive(Debug)]
pub enum AppMessage {
    /// First message of the session: load the initial page.
    Start,
    Quit,
    /// Switch focus between navigation and content.
    ToggleFocus,
    Navigation(NavigationMessage),
    Content(ContentMessage),
    Modal(ModalMessage),
    /// Result of a background task.
    Backend(BackendEvent),
    /// Close the dialog, leave the detail page, or dismiss toasts.
    GoBack,
    /// Reload the current page.
    Refresh,
    ShowHelp,
    /// Loop heartbeat, expires toasts.
    Tick,
    Noop,
}
