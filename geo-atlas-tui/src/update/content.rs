//! Current page messages

use futures::future::BoxFuture;
use futures::FutureExt;
use geo_atlas_client::GeoId;
use geo_atlas_core::{CoreResult, Notification, Notifier};

use super::navigation::open_page;
use crate::backend::{BackendEvent, EditPayload, EntityKind};
use crate::message::ContentMessage;
use crate::model::state::{EntityDraft, FormModal};
use crate::model::{App, Page};

pub fn update(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious
        | ContentMessage::SelectNext
        | ContentMessage::SelectFirst
        | ContentMessage::SelectLast => move_cursor(app, msg),
        ContentMessage::Confirm => handle_confirm(app),

        ContentMessage::Add => handle_add(app),
        ContentMessage::Edit => handle_edit(app),
        ContentMessage::Delete => handle_delete(app),
        ContentMessage::Filter => {
            if app.list_page().is_some() {
                app.modal.show_filter();
            }
        }

        ContentMessage::UploadImage => handle_upload_image(app),
        ContentMessage::DeleteImage => handle_delete_image(app),

        ContentMessage::TogglePrev | ContentMessage::ToggleNext => {
            if app.current_page == Page::Settings {
                app.settings.toggle_theme();
                app.save_settings();
            }
        }
    }
}

fn move_cursor(app: &mut App, msg: ContentMessage) {
    let Some(page) = app.list_page_mut() else {
        return;
    };
    let len = page.row_count();
    let cursor = page.cursor_mut();
    match msg {
        ContentMessage::SelectPrevious => cursor.select_previous(len),
        ContentMessage::SelectNext => cursor.select_next(len),
        ContentMessage::SelectFirst => cursor.select_first(),
        ContentMessage::SelectLast => cursor.select_last(len),
        _ => {}
    }
}

/// Enter opens a landmark; on the other lists it edits the row.
fn handle_confirm(app: &mut App) {
    let Some(page) = app.list_page() else {
        return;
    };
    if page.kind() != EntityKind::Landmark {
        handle_edit(app);
        return;
    }
    if let Some((landmark_id, _)) = page.selected() {
        open_page(app, Page::LandmarkDetail { landmark_id });
    }
}

fn handle_add(app: &mut App) {
    let Some(page) = app.list_page() else {
        return;
    };
    let draft = EntityDraft::blank(page.kind());
    let cascade = app.services.location_cascade();
    open_form(app, FormModal::new(draft, None, cascade));
}

/// Opens a dialog and starts its option loads.
pub fn open_form(app: &mut App, form: FormModal) {
    for load in form.opening_loads() {
        app.runner.spawn(load);
    }
    app.modal.show_form(form);
}

/// Fetches the entity first; the dialog opens when `EditLoaded` arrives.
fn handle_edit(app: &mut App) {
    let target = match &app.current_page {
        Page::LandmarkDetail { landmark_id } => Some((EntityKind::Landmark, *landmark_id)),
        _ => app
            .list_page()
            .and_then(|page| page.selected().map(|(id, _)| (page.kind(), id))),
    };
    if let Some((kind, id)) = target {
        fetch_for_edit(app, kind, id);
    }
}

fn fetch_for_edit(app: &App, kind: EntityKind, id: GeoId) {
    log::debug!("Loading {} {id} for editing", kind.name());
    let services = &app.services;
    let loaded = |payload: EditPayload| BackendEvent::EditLoaded(Box::new(payload));
    match kind {
        EntityKind::Country => {
            let service = services.entity_service(&services.countries);
            app.runner.spawn_reply(async move {
                let details = service.get(id).await.ok()?;
                Some(loaded(EditPayload::Country(id, details)))
            });
        }
        EntityKind::Region => {
            let service = services.entity_service(&services.regions);
            app.runner.spawn_reply(async move {
                let details = service.get(id).await.ok()?;
                Some(loaded(EditPayload::Region(id, details)))
            });
        }
        EntityKind::City => {
            let service = services.entity_service(&services.cities);
            app.runner.spawn_reply(async move {
                let details = service.get(id).await.ok()?;
                Some(loaded(EditPayload::City(id, details)))
            });
        }
        EntityKind::Landmark => {
            let loader = services.landmark_form_loader();
            app.runner.spawn_reply(async move {
                let landmark = loader.load(id).await.ok()?;
                Some(loaded(EditPayload::Landmark(id, landmark)))
            });
        }
    }
}

fn handle_delete(app: &mut App) {
    let Some(page) = app.list_page() else {
        return;
    };
    let Some((id, label)) = page.selected() else {
        return;
    };
    page.request_delete(id);
    let kind = page.kind();
    app.modal.show_confirm_delete(kind, &label);
}

fn handle_upload_image(app: &mut App) {
    if app.detail.as_ref().is_some_and(|d| d.accepts_image_action()) {
        app.modal.show_upload_image();
    }
}

fn handle_delete_image(app: &mut App) {
    let Some(detail) = &app.detail else {
        return;
    };
    if !detail.accepts_image_action() {
        return;
    }
    if detail.has_image() {
        app.modal.show_confirm_delete_image();
    } else {
        app.toasts.notify(Notification::info("This landmark has no image"));
    }
}

/// Runs an image operation and reports when it is done.
pub fn spawn_image_task(app: &App, task: BoxFuture<'static, CoreResult<()>>) {
    app.runner
        .spawn_reply(task.map(|result| Some(BackendEvent::ImageFinished { ok: result.is_ok() })));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[tokio::test]
    async fn filter_only_opens_on_list_pages() {
        let mut app = test_app();
        update(&mut app, ContentMessage::Filter);
        assert!(app.modal.is_open());

        app.modal.close();
        open_page(&mut app, Page::Settings);
        update(&mut app, ContentMessage::Filter);
        assert!(!app.modal.is_open());
    }

    #[tokio::test]
    async fn image_actions_wait_for_the_landmark() {
        let mut app = test_app();
        open_page(&mut app, Page::LandmarkDetail {
            landmark_id: GeoId(9),
        });
        update(&mut app, ContentMessage::UploadImage);
        assert!(!app.modal.is_open());
    }

    #[tokio::test]
    async fn add_on_regions_opens_a_region_form() {
        let mut app = test_app();
        open_page(&mut app, Page::Regions);
        update(&mut app, ContentMessage::Add);
        let Some(form) = app.modal.form_mut() else {
            panic!("form dialog not open");
        };
        assert_eq!(form.draft.kind(), EntityKind::Region);
        assert!(form.existing_id.is_none());
    }
}
