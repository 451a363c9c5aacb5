//! Core data types

mod notification;
mod option;

pub use notification::{Notification, Severity};
pub use option::GeoOption;
