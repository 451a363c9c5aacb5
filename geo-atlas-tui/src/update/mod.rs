//! Update layer: the only place that changes the model
//!
//! `update` consumes one message. Sub-messages are delegated to `navigation`,
//! `content` and `modal`; background outcomes go to `backend`. Remote work is
//! started by spawning view-model futures on the [`TaskRunner`](crate::backend::TaskRunner),
//! never by awaiting here.

mod backend;
mod content;
mod modal;
mod navigation;

use crate::message::AppMessage;
use crate::model::App;

pub use navigation::open_page;

pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Start => {
            navigation::mount_current_page(app);
        }

        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.modal.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),
        AppMessage::Content(content_msg) => content::update(app, content_msg),
        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),
        AppMessage::Backend(event) => backend::update(app, event),

        AppMessage::GoBack => {
            if app.modal.is_open() {
                modal::close(app);
            } else if app.current_page.is_detail_page() {
                open_page(app, crate::model::Page::Landmarks);
            } else if !app.toasts.is_empty() {
                app.toasts.dismiss_all();
            }
        }

        AppMessage::Refresh => refresh(app),

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Tick => {
            app.toasts.expire(std::time::Instant::now());
        }

        AppMessage::Noop => {}
    }
}

/// Reloads whatever the current page shows.
fn refresh(app: &mut App) {
    if let Some(page) = app.list_page() {
        log::debug!("Refreshing {} list", page.kind().name());
        app.runner.spawn(page.reload());
    } else if let Some(detail) = &app.detail {
        app.runner.spawn(detail.view.load());
    }
}
