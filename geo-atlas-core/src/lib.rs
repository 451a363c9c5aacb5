//! Geo Atlas Core Library
//!
//! View logic of the Geo Atlas admin console, independent of how it is rendered:
//! - Cascading country → region → city selection (`selection`)
//! - List, detail and form view models (`services`, `forms`)
//! - Notification seam and label helpers
//!
//! Remote access goes through the repository traits of `geo-atlas-client`, so every
//! view model can be driven by in-memory mocks in tests.

pub mod config;
pub mod error;
pub mod forms;
pub mod selection;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::ApiConfig;
pub use error::{CoreError, CoreResult};
pub use selection::{CascadeSnapshot, LocationCascade, LocationSelection, TierLoad};
pub use services::{ServiceContext, ViewTask};
pub use traits::{LocationSource, Notifier};
pub use types::{GeoOption, Notification, Severity};
