//! Cascading country → region → city selection
//!
//! [`LocationCascade`] owns the three option lists and their loading flags.
//! The selected ids belong to the consumer, in a [`LocationSelection`].

mod cascade;
mod state;
mod ticket;

pub use cascade::{CascadeSnapshot, LocationCascade, TierLoad, TierSnapshot};
pub use state::LocationSelection;
pub(crate) use ticket::RequestGate;
