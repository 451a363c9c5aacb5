pub mod modal;
pub mod navigation;
pub mod statusbar;
