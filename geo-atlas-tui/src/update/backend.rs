//! Background outcomes

use geo_atlas_core::forms::{CityForm, CountryForm, LandmarkForm, RegionForm};

use super::content::open_form;
use crate::backend::{BackendEvent, EditPayload, EntityKind};
use crate::model::state::{EntityDraft, FormModal, Modal};
use crate::model::App;

pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::EditLoaded(payload) => open_edit_form(app, *payload),
        BackendEvent::Saved(kind) => handle_saved(app, kind),
        BackendEvent::SaveFailed(message) => {
            if let Some(form) = app.modal.form_mut() {
                form.saving = false;
                form.error = Some(message);
            }
        }
        BackendEvent::ImageFinished { ok } => handle_image_finished(app, ok),
    }
}

fn open_edit_form(app: &mut App, payload: EditPayload) {
    // The user moved on to another dialog while the entity was loading.
    if app.modal.is_open() {
        log::debug!("Dropping edit data, a dialog is already open");
        return;
    }
    let (id, draft) = match payload {
        EditPayload::Country(id, details) => {
            (id, EntityDraft::Country(CountryForm::from_details(&details)))
        }
        EditPayload::Region(id, details) => {
            (id, EntityDraft::Region(RegionForm::from_details(&details)))
        }
        EditPayload::City(id, details) => (id, EntityDraft::City(CityForm::from_details(&details))),
        EditPayload::Landmark(id, loaded) => (
            id,
            EntityDraft::Landmark(LandmarkForm::from_details(&loaded.details, loaded.selection)),
        ),
    };
    let cascade = app.services.location_cascade();
    open_form(app, FormModal::new(draft, Some(id), cascade));
}

/// Closes the dialog and reloads what shows the saved entity.
fn handle_saved(app: &mut App, kind: EntityKind) {
    if matches!(app.modal.active, Some(Modal::Form(_))) {
        app.modal.close();
    }
    app.runner.spawn(app.list_page_for(kind).reload());
    if kind == EntityKind::Landmark {
        if let Some(detail) = &app.detail {
            app.runner.spawn(detail.view.load());
        }
    }
}

fn handle_image_finished(app: &mut App, ok: bool) {
    if let Some(detail) = &mut app.detail {
        detail.busy = false;
    }
    // A failure was toasted; the dialog keeps its path so the user can retry.
    let uploaded = match &mut app.modal.active {
        Some(Modal::UploadImage { uploading, .. }) => {
            *uploading = false;
            ok
        }
        _ => false,
    };
    if uploaded {
        app.modal.close();
    }
    // The list shows whether a landmark has an image.
    if ok {
        app.runner.spawn(app.landmarks.view.reload());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use geo_atlas_client::{CountryDetails, GeoId};

    fn poland() -> CountryDetails {
        CountryDetails {
            id: GeoId(1),
            name: "Poland".to_string(),
            code: "PL".to_string(),
        }
    }

    #[tokio::test]
    async fn edit_data_opens_a_filled_form() {
        let mut app = test_app();
        update(
            &mut app,
            BackendEvent::EditLoaded(Box::new(EditPayload::Country(GeoId(1), poland()))),
        );
        let Some(form) = app.modal.form_mut() else {
            panic!("edit dialog not open");
        };
        assert_eq!(form.existing_id, Some(GeoId(1)));
        assert_eq!(form.title(), " Edit Country ");
        assert_eq!(
            form.draft.text(crate::model::state::FormField::Code),
            Some("PL")
        );
    }

    #[tokio::test]
    async fn edit_data_does_not_replace_an_open_dialog() {
        let mut app = test_app();
        app.modal.show_help();
        update(
            &mut app,
            BackendEvent::EditLoaded(Box::new(EditPayload::Country(GeoId(1), poland()))),
        );
        assert!(matches!(app.modal.active, Some(Modal::Help)));
    }

    #[tokio::test]
    async fn failed_save_keeps_the_dialog_open() {
        let mut app = test_app();
        app.modal.show_form(FormModal::new(
            EntityDraft::blank(EntityKind::Country),
            None,
            app.services.location_cascade(),
        ));
        if let Some(form) = app.modal.form_mut() {
            form.saving = true;
        }
        update(&mut app, BackendEvent::SaveFailed("Code already exists".to_string()));
        let Some(form) = app.modal.form_mut() else {
            panic!("dialog closed after a failed save");
        };
        assert!(!form.saving);
        assert_eq!(form.error.as_deref(), Some("Code already exists"));

        update(&mut app, BackendEvent::Saved(EntityKind::Country));
        assert!(!app.modal.is_open());
    }

    #[tokio::test]
    async fn failed_upload_keeps_the_path() {
        let mut app = test_app();
        app.modal.active = Some(Modal::UploadImage {
            path: "/tmp/castle.png".to_string(),
            error: None,
            uploading: true,
        });
        update(&mut app, BackendEvent::ImageFinished { ok: false });
        assert!(matches!(
            &app.modal.active,
            Some(Modal::UploadImage { path, uploading: false, .. }) if path == "/tmp/castle.png"
        ));

        update(&mut app, BackendEvent::ImageFinished { ok: true });
        assert!(!app.modal.is_open());
    }
}
