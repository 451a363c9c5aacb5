//! View layer
//!
//! Pure rendering: reads the model and the view-model snapshots, never mutates.

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
