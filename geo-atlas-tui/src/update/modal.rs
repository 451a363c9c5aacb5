//! Dialog messages

use std::path::Path;

use futures::future::BoxFuture;
use futures::FutureExt;
use geo_atlas_client::{GeoId, ImageUpload};
use geo_atlas_core::forms::EntityForm;
use geo_atlas_core::services::EntityService;
use geo_atlas_core::{CoreError, CoreResult};

use super::content::spawn_image_task;
use crate::backend::BackendEvent;
use crate::message::ModalMessage;
use crate::model::state::{
    inline_message, EntityDraft, FilterField, Modal, PageEntity, CONFIRM_ACCEPT, CONFIRM_CANCEL,
};
use crate::model::App;

pub fn update(app: &mut App, msg: ModalMessage) {
    if msg == ModalMessage::Close {
        close(app);
        return;
    }

    let Some(modal) = &app.modal.active else {
        return;
    };

    match modal {
        Modal::Form(_) => handle_form(app, msg),
        Modal::Filter { .. } => handle_filter(app, msg),
        Modal::ConfirmDelete { .. } => handle_confirm_delete(app, msg),
        Modal::ConfirmDeleteImage { .. } => handle_confirm_delete_image(app, msg),
        Modal::UploadImage { .. } => handle_upload_image(app, msg),
        Modal::Help => {
            if msg == ModalMessage::Confirm {
                app.modal.close();
            }
        }
    }
}

/// Closes the dialog. A dismissed delete confirmation forgets its pending row.
///
/// A dialog waiting on a save or upload stays open, so its reply cannot land
/// on a dialog opened after it.
pub fn close(app: &mut App) {
    if app.modal.is_busy() {
        log::debug!("Dialog close ignored while a request is pending");
        return;
    }
    if let Some(Modal::ConfirmDelete { entity, .. }) = &app.modal.active {
        app.list_page_for(*entity).cancel_delete();
    }
    app.modal.close();
}

fn flip(focus: usize) -> usize {
    if focus == CONFIRM_CANCEL {
        CONFIRM_ACCEPT
    } else {
        CONFIRM_CANCEL
    }
}

// ========== Create / edit form ==========

fn handle_form(app: &mut App, msg: ModalMessage) {
    let runner = app.runner.clone();
    let Some(form) = app.modal.form_mut() else {
        return;
    };
    // Fields are frozen while the request is in flight.
    if form.saving {
        return;
    }

    match msg {
        ModalMessage::NextField => form.next_field(),
        ModalMessage::PrevField => form.prev_field(),
        ModalMessage::PrevOption | ModalMessage::NextOption => {
            if let Some(load) = form.cycle(msg == ModalMessage::NextOption) {
                runner.spawn(load);
            }
        }
        ModalMessage::Input(ch) => form.input(ch),
        ModalMessage::Backspace => form.backspace(),
        ModalMessage::ClearField => {
            if let Some(load) = form.clear_field() {
                runner.spawn(load);
            }
        }
        ModalMessage::Confirm => submit_form(app),
        ModalMessage::Close | ModalMessage::Toggle | ModalMessage::ToggleConfirmFocus => {}
    }
}

/// Validates the form and starts the save; the dialog stays open until it answers.
fn submit_form(app: &mut App) {
    let services = app.services.clone();
    let runner = app.runner.clone();
    let Some(form) = app.modal.form_mut() else {
        return;
    };

    let id = form.existing_id;
    let task = match &form.draft {
        EntityDraft::Country(f) => f
            .to_request()
            .map(|req| save_task(services.entity_service(&services.countries), id, req)),
        EntityDraft::Region(f) => f
            .to_request()
            .map(|req| save_task(services.entity_service(&services.regions), id, req)),
        EntityDraft::City(f) => f
            .to_request()
            .map(|req| save_task(services.entity_service(&services.cities), id, req)),
        EntityDraft::Landmark(f) => f
            .to_request()
            .map(|req| save_task(services.entity_service(&services.landmarks), id, req)),
    };

    match task {
        Ok(task) => {
            form.error = None;
            form.saving = true;
            runner.spawn_reply(task);
        }
        Err(e) => form.error = Some(inline_message(&e)),
    }
}

fn save_task<E: PageEntity>(
    service: EntityService<E>,
    id: Option<GeoId>,
    request: E::Request,
) -> BoxFuture<'static, Option<BackendEvent>> {
    async move {
        let event = match service.save(id, &request).await {
            Ok(_) => BackendEvent::Saved(E::KIND),
            Err(e) => BackendEvent::SaveFailed(inline_message(&e)),
        };
        Some(event)
    }
    .boxed()
}

// ========== List filter ==========

/// Filter changes apply to the list right away.
fn handle_filter(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Filter { focus }) = app.modal.active else {
        return;
    };
    let runner = app.runner.clone();
    let Some(page) = app.list_page_mut() else {
        return;
    };
    let fields = page.filter_fields();
    let count = fields.len();
    let Some(&field) = fields.get(focus) else {
        return;
    };

    let mut new_focus = focus;
    let changed = match msg {
        ModalMessage::NextField => {
            new_focus = (focus + 1) % count;
            false
        }
        ModalMessage::PrevField => {
            new_focus = (focus + count - 1) % count;
            false
        }
        ModalMessage::PrevOption | ModalMessage::NextOption => {
            let before = page.filter().summary(&[field]);
            if let Some(load) = page.filter_mut().cycle(field, msg == ModalMessage::NextOption) {
                runner.spawn(load);
            }
            page.filter().summary(&[field]) != before
        }
        ModalMessage::Toggle if field == FilterField::IncludeDeleted => {
            let filter = page.filter_mut();
            filter.include_deleted = !filter.include_deleted;
            true
        }
        ModalMessage::Input(ch) if field == FilterField::NameContains => {
            page.filter_mut().name_contains.push(ch);
            true
        }
        ModalMessage::Backspace if field == FilterField::NameContains => {
            page.filter_mut().name_contains.pop().is_some()
        }
        ModalMessage::ClearField => {
            if let Some(load) = page.filter_mut().clear(field) {
                runner.spawn(load);
            }
            true
        }
        ModalMessage::Confirm => {
            app.modal.close();
            return;
        }
        _ => false,
    };

    if changed {
        page.cursor_mut().select_first();
        runner.spawn(page.apply_filter());
    }
    if let Some(Modal::Filter { focus }) = &mut app.modal.active {
        *focus = new_focus;
    }
}

// ========== Confirmations ==========

fn handle_confirm_delete(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDelete {
        entity,
        ref mut focus,
        ..
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::ToggleConfirmFocus => *focus = flip(*focus),
        ModalMessage::Confirm => {
            let accepted = *focus == CONFIRM_ACCEPT;
            let page = app.list_page_for(entity);
            if accepted {
                log::info!("Deleting {}", entity.name());
                app.runner.spawn(page.confirm_delete());
            } else {
                page.cancel_delete();
            }
            app.modal.close();
        }
        _ => {}
    }
}

fn handle_confirm_delete_image(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmDeleteImage { ref mut focus }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::ToggleConfirmFocus => *focus = flip(*focus),
        ModalMessage::Confirm => {
            let accepted = *focus == CONFIRM_ACCEPT;
            app.modal.close();
            if !accepted {
                return;
            }
            if let Some(detail) = &mut app.detail {
                detail.busy = true;
                let task = detail.view.delete_image();
                spawn_image_task(app, task);
            }
        }
        _ => {}
    }
}

// ========== Image upload ==========

fn handle_upload_image(app: &mut App, msg: ModalMessage) {
    let Some(Modal::UploadImage {
        ref mut path,
        ref mut error,
        uploading,
    }) = app.modal.active
    else {
        return;
    };
    if uploading {
        return;
    }

    match msg {
        ModalMessage::Input(ch) => {
            path.push(ch);
            *error = None;
        }
        ModalMessage::Backspace => {
            path.pop();
        }
        ModalMessage::ClearField => path.clear(),
        ModalMessage::Confirm => {
            let image = read_image(path.trim());
            match image {
                Ok(image) => start_upload(app, image),
                Err(message) => *error = Some(message),
            }
        }
        _ => {}
    }
}

/// Reads and type-checks the chosen file.
fn read_image(path: &str) -> Result<ImageUpload, String> {
    if path.is_empty() {
        return Err("Please choose an image file".to_string());
    }
    ImageUpload::from_path(Path::new(path)).map_err(|e| inline_message(&CoreError::from(e)))
}

fn start_upload(app: &mut App, image: ImageUpload) {
    let Some(detail) = &mut app.detail else {
        app.modal.close();
        return;
    };
    log::info!("Uploading {} for landmark {}", image.file_name, detail.view.id());
    detail.busy = true;
    let task: BoxFuture<'static, CoreResult<()>> = detail.view.upload_image(image);
    if let Some(Modal::UploadImage { uploading, .. }) = &mut app.modal.active {
        *uploading = true;
    }
    spawn_image_task(app, task);
}
