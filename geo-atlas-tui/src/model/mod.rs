//! Model layer
//!
//! `App` is the whole UI state. Remote data is not copied into it: each list page
//! wraps a `CollectionView`, the detail page a `LandmarkDetailView`, and dialogs a
//! `LocationCascade`. Those view models are shared with the background tasks that
//! fill them, and the view layer reads their snapshots on every frame.

mod app;
mod focus;
mod navigation;
mod page;
pub mod state;

pub use app::{page_kind, App};
pub use focus::FocusPanel;
pub use navigation::{NavItem, NavItemId, NavigationState};
pub use page::Page;
