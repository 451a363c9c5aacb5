//! Backend layer
//!
//! Glue between the UI loop and the async view models:
//! - `TaskRunner` spawns view-model futures on the tokio runtime and forwards
//!   outcomes that need a UI reaction as [`BackendEvent`]s.
//! - `ToastCenter` is the console's notifier.
//! - `LocalConfigService` persists console settings.

mod config_service;
mod tasks;
mod toast_center;

pub use config_service::{AppSettings, ConfigService, LocalConfigService};
pub use tasks::{BackendEvent, EditPayload, EntityKind, TaskRunner};
pub use toast_center::{Toast, ToastCenter, TOAST_TTL};
