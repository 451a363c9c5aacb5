//! Key press dispatch

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::{FieldKind, Modal};
use crate::model::{App, Page};

/// Waits up to `timeout` for a terminal event.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Resize needs nothing but the redraw every loop turn does anyway.
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Release and Repeat events would double every key on Windows terminals.
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) || (key.modifiers.is_empty() && key.code == KeyCode::Char('?')) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, &app.current_page)
    }
}

fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => NavigationMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => NavigationMessage::SelectNext,
        KeyCode::Home => NavigationMessage::SelectFirst,
        KeyCode::End => NavigationMessage::SelectLast,
        KeyCode::Enter | KeyCode::Right => NavigationMessage::Confirm,
        _ => return AppMessage::Noop,
    };
    AppMessage::Navigation(msg)
}

fn handle_content_keys(key: KeyEvent, page: &Page) -> AppMessage {
    match page {
        Page::Settings => handle_settings_keys(key),
        Page::LandmarkDetail { .. } => handle_detail_keys(key),
        _ => handle_list_keys(key),
    }
}

fn handle_list_keys(key: KeyEvent) -> AppMessage {
    let action = [
        (&DefaultKeymap::ACTION_ADD, ContentMessage::Add),
        (&DefaultKeymap::ACTION_EDIT, ContentMessage::Edit),
        (&DefaultKeymap::ACTION_DELETE, ContentMessage::Delete),
        (&DefaultKeymap::ACTION_FILTER, ContentMessage::Filter),
    ]
    .into_iter()
    .find_map(|(binding, msg)| binding.matches(&key).then_some(msg));
    if let Some(msg) = action {
        return AppMessage::Content(msg);
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectNext,
        KeyCode::Home => ContentMessage::SelectFirst,
        KeyCode::End => ContentMessage::SelectLast,
        KeyCode::Enter => ContentMessage::Confirm,
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    let msg = if DefaultKeymap::ACTION_UPLOAD.matches(&key) {
        ContentMessage::UploadImage
    } else if DefaultKeymap::ACTION_REMOVE_IMAGE.matches(&key) {
        ContentMessage::DeleteImage
    } else if DefaultKeymap::ACTION_EDIT.matches(&key) {
        ContentMessage::Edit
    } else {
        return AppMessage::Noop;
    };
    AppMessage::Content(msg)
}

fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right | KeyCode::Enter => AppMessage::Content(ContentMessage::ToggleNext),
        _ => AppMessage::Noop,
    }
}

fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc and Ctrl+C always close the dialog.
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let Some(modal) = &app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::Form(form) => handle_dialog_keys(key, form.focused_field().map(|f| f.kind())),
        Modal::Filter { focus } => {
            let kind = app
                .list_page()
                .and_then(|page| page.filter_fields().get(*focus))
                .map(|field| field.kind());
            handle_dialog_keys(key, kind)
        }
        Modal::ConfirmDelete { .. } | Modal::ConfirmDeleteImage { .. } => {
            handle_confirm_keys(key)
        }
        Modal::UploadImage { .. } => handle_dialog_keys(key, Some(FieldKind::Text)),
        Modal::Help => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
            _ => AppMessage::Noop,
        },
    }
}

/// Keys of a dialog with fields; `field` is the kind of the focused one.
fn handle_dialog_keys(key: KeyEvent, field: Option<FieldKind>) -> AppMessage {
    if DefaultKeymap::CLEAR_FIELD.matches(&key) {
        return AppMessage::Modal(ModalMessage::ClearField);
    }

    let msg = match (key.code, field) {
        (KeyCode::Tab | KeyCode::Down, _) => ModalMessage::NextField,
        (KeyCode::BackTab | KeyCode::Up, _) => ModalMessage::PrevField,
        (KeyCode::Enter, _) => ModalMessage::Confirm,
        (KeyCode::Left, Some(FieldKind::Select)) => ModalMessage::PrevOption,
        (KeyCode::Right, Some(FieldKind::Select)) => ModalMessage::NextOption,
        (KeyCode::Char(' '), Some(FieldKind::Checkbox)) => ModalMessage::Toggle,
        (KeyCode::Delete, _) => ModalMessage::ClearField,
        (KeyCode::Backspace, Some(FieldKind::Text)) => ModalMessage::Backspace,
        (KeyCode::Char(ch), Some(FieldKind::Text)) if is_plain(key.modifiers) => {
            ModalMessage::Input(ch)
        }
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}

fn handle_confirm_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleConfirmFocus)
        }
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// Typing keys: no modifier, or Shift for capitals.
fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::SHIFT
}
