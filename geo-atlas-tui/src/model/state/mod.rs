//! Per-page and per-dialog state

mod collection;
mod cursor;
mod detail;
mod filter;
mod form;
mod modal;
mod select;
mod settings;

pub use collection::{CollectionPage, ListPage, PageEntity};
pub use cursor::ListCursor;
pub use detail::DetailPage;
pub use filter::{FilterField, FilterState};
pub use form::{inline_message, EntityDraft, FormField, FormModal};
pub use modal::{Modal, ModalState, CONFIRM_ACCEPT, CONFIRM_CANCEL};
pub use select::{cycle_option, cycle_optional_code, option_label, FieldKind};
pub use settings::{SettingsState, Theme};
