//! Seams injected by the hosting shell

mod location_source;
mod notifier;

pub use location_source::LocationSource;
pub use notifier::Notifier;
