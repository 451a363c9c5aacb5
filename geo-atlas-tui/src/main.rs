//! Geo Atlas terminal console
//!
//! The console follows The Elm Architecture:
//!
//! ```text
//!   key press ──▶ event ──▶ message ──▶ update ──▶ model ──▶ view
//!                                          │
//!                                          ▼
//!                                    backend tasks ──▶ BackendEvent ──▶ update
//! ```
//!
//! View models from `geo-atlas-core` own the remote data; the model layer only keeps
//! cursors, dialogs and the current page.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::{Context, Result};
use geo_atlas_core::{ApiConfig, Notifier, ServiceContext};

use backend::{LocalConfigService, TaskRunner, ToastCenter};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // The guard flushes the log file on exit.
    let _log_guard = init_logging()?;
    log::info!("Starting Geo Atlas console v{}", env!("CARGO_PKG_VERSION"));

    let config = ApiConfig::from_env().context("Failed to read the API origin")?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start the async runtime")?;

    let toasts = Arc::new(ToastCenter::new());
    let notifier: Arc<dyn Notifier> = toasts.clone();
    let services = ServiceContext::connect(config, notifier)?;
    let (runner, events) = TaskRunner::new(runtime.handle().clone());
    let settings = LocalConfigService::default_location();

    let mut app = model::App::new(services, toasts, runner, settings);

    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, events);

    // Restore the terminal whatever the loop returned.
    restore_terminal(&mut terminal)?;

    runtime.shutdown_background();
    log::info!("Geo Atlas console stopped");
    result
}
