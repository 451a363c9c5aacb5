//! Message layer
//!
//! Every key press and every background outcome becomes one [`AppMessage`]. The
//! event layer creates messages, the update layer consumes them:
//!
//! ```text
//!   event::handle_event(event, &app) -> AppMessage
//!   update::update(&mut app, msg)
//! ```
//!
//! Sub-messages are grouped by where the focus is:
//! - `NavigationMessage`: the page list on the left
//! - `ContentMessage`: the current page (list, detail or settings)
//! - `ModalMessage`: the open dialog

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
