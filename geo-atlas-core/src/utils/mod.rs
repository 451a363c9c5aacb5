//! Utility functions

pub mod labels;
