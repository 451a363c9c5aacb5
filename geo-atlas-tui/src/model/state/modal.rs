//! Dialog state

use super::form::FormModal;
use crate::backend::EntityKind;

/// Button focus of a confirmation dialog.
pub const CONFIRM_CANCEL: usize = 0;
pub const CONFIRM_ACCEPT: usize = 1;

/// The open dialog.
pub enum Modal {
    /// Create or edit form
    Form(Box<FormModal>),
    /// Filter controls of the current list page
    Filter {
        /// Index into the page's filter fields
        focus: usize,
    },
    /// Delete confirmation; the row id is held by the list view as its pending delete
    ConfirmDelete {
        entity: EntityKind,
        item_name: String,
        /// 0 = Cancel, 1 = Delete
        focus: usize,
    },
    /// Image removal confirmation on the detail page
    ConfirmDeleteImage { focus: usize },
    /// Path prompt for a new landmark image
    UploadImage {
        path: String,
        error: Option<String>,
        uploading: bool,
    },
    Help,
}

/// Dialog slot of the application.
#[derive(Default)]
pub struct ModalState {
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_form(&mut self, form: FormModal) {
        self.active = Some(Modal::Form(Box::new(form)));
    }

    pub fn show_filter(&mut self) {
        self.active = Some(Modal::Filter { focus: 0 });
    }

    /// Opens the delete confirmation with Cancel focused.
    pub fn show_confirm_delete(&mut self, entity: EntityKind, item_name: &str) {
        self.active = Some(Modal::ConfirmDelete {
            entity,
            item_name: item_name.to_string(),
            focus: CONFIRM_CANCEL,
        });
    }

    pub fn show_confirm_delete_image(&mut self) {
        self.active = Some(Modal::ConfirmDeleteImage {
            focus: CONFIRM_CANCEL,
        });
    }

    pub fn show_upload_image(&mut self) {
        self.active = Some(Modal::UploadImage {
            path: String::new(),
            error: None,
            uploading: false,
        });
    }

    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// Whether the open dialog waits on a save or upload. Such a dialog stays
    /// open until its reply arrives.
    pub fn is_busy(&self) -> bool {
        match &self.active {
            Some(Modal::Form(form)) => form.saving,
            Some(Modal::UploadImage { uploading, .. }) => *uploading,
            _ => false,
        }
    }

    /// The open form dialog, if any.
    pub fn form_mut(&mut self) -> Option<&mut FormModal> {
        match &mut self.active {
            Some(Modal::Form(form)) => Some(form),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmations_focus_cancel() {
        let mut modal = ModalState::new();
        modal.show_confirm_delete(EntityKind::City, "Kraków");
        assert!(matches!(
            modal.active,
            Some(Modal::ConfirmDelete { focus: CONFIRM_CANCEL, ref item_name, .. }) if item_name == "Kraków"
        ));

        modal.show_confirm_delete_image();
        assert!(matches!(
            modal.active,
            Some(Modal::ConfirmDeleteImage { focus: CONFIRM_CANCEL })
        ));
    }

    #[test]
    fn pending_upload_is_busy() {
        let mut modal = ModalState::new();
        modal.show_upload_image();
        assert!(!modal.is_busy());
        if let Some(Modal::UploadImage { uploading, .. }) = &mut modal.active {
            *uploading = true;
        }
        assert!(modal.is_busy());
    }

    #[test]
    fn close_clears_the_slot() {
        let mut modal = ModalState::new();
        modal.show_help();
        assert!(modal.is_open());
        assert!(modal.form_mut().is_none());
        modal.close();
        assert!(!modal.is_open());
    }
}
