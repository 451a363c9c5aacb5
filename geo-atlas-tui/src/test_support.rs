//! Test fixtures

use std::sync::Arc;

use geo_atlas_core::{ApiConfig, Notifier, ServiceContext};
use tokio::runtime::Handle;

use crate::backend::{TaskRunner, ToastCenter};
use crate::model::App;

/// An app wired to an unreachable API and no settings file.
///
/// Spawned tasks only run when the test yields, so the model can be inspected
/// right after each update. Must be called inside a Tokio runtime.
pub fn test_app() -> App {
    let toasts = Arc::new(ToastCenter::new());
    let notifier: Arc<dyn Notifier> = toasts.clone();
    let config = ApiConfig::new("http://127.0.0.1:9").expect("valid origin");
    let services = ServiceContext::connect(config, notifier).expect("client builds");
    let (runner, _events) = TaskRunner::new(Handle::current());
    App::new(services, toasts, runner, None)
}
