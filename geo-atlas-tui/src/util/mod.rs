//! Util layer: terminal setup, log file and text helpers

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::{fit_width, with_cursor};
