//! Dialogs

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::state::{FieldKind, FormModal, Modal, CONFIRM_ACCEPT, CONFIRM_CANCEL};
use crate::model::App;
use crate::util::{fit_width, with_cursor};

/// Label column of the field dialogs.
const LABEL_WIDTH: usize = 24;
const DIALOG_WIDTH: u16 = 72;

pub fn render(app: &App, frame: &mut Frame) {
    let Some(modal) = &app.modal.active else {
        return;
    };

    match modal {
        Modal::Form(form) => render_form(frame, form),
        Modal::Filter { focus } => render_filter(app, frame, *focus),
        Modal::ConfirmDelete {
            entity,
            item_name,
            focus,
        } => render_confirm(
            frame,
            " Confirm Deletion ",
            &format!("Delete this {}?", entity.name().to_lowercase()),
            Some(item_name.as_str()),
            *focus,
        ),
        Modal::ConfirmDeleteImage { focus } => render_confirm(
            frame,
            " Remove Image ",
            "Remove the image of this landmark?",
            None,
            *focus,
        ),
        Modal::UploadImage {
            path,
            error,
            uploading,
        } => render_upload(frame, path, error.as_deref(), *uploading),
        Modal::Help => render_help(frame),
    }
}

/// Area of a `width` x `height` dialog in the middle of `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Clears the dialog area, draws its frame and returns the text area inside.
fn dialog_frame(frame: &mut Frame, title: &str, border: Color, width: u16, height: u16) -> Rect {
    let area = centered_rect(width, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title.to_string())
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(block, area);

    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

/// `height` for `rows` lines of content plus the frame.
fn dialog_height(rows: usize) -> u16 {
    u16::try_from(rows + 2).unwrap_or(u16::MAX)
}

/// One `label  value` row of a field dialog.
fn field_line(
    label: &str,
    value: &str,
    kind: FieldKind,
    focused: bool,
    enabled: bool,
    value_width: usize,
) -> Line<'static> {
    let pad = LABEL_WIDTH.saturating_sub(label.width());
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let (text, value_style) = match kind {
        _ if !enabled => (value.to_string(), Style::default().fg(Color::DarkGray)),
        FieldKind::Select if focused => (
            format!("◀ {value} ▶"),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        FieldKind::Text if focused => (with_cursor(value, true), Style::default().fg(Color::Cyan)),
        _ if focused => (value.to_string(), Style::default().fg(Color::Cyan)),
        _ => (value.to_string(), Style::default().fg(Color::White)),
    };

    Line::from(vec![
        Span::styled(format!("{label}{}", " ".repeat(pad)), label_style),
        Span::styled(fit_width(&text, value_width), value_style),
    ])
}

fn hint_line(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(format!(" {desc}"), Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

fn error_line(message: &str) -> Line<'static> {
    Line::styled(format!("  ⚠ {message}"), Style::default().fg(Color::Red))
}

fn render_form(frame: &mut Frame, form: &FormModal) {
    let fields = form.draft.fields();
    let snapshot = form.cascade.snapshot();
    let value_width = usize::from(DIALOG_WIDTH).saturating_sub(4 + LABEL_WIDTH);

    let mut lines = vec![Line::from("")];
    for (i, &field) in fields.iter().enumerate() {
        let kind = field.kind();
        let enabled = kind != FieldKind::Select || form.selectable(field, &snapshot);
        lines.push(field_line(
            field.label(),
            &form.display(field, &snapshot),
            kind,
            i == form.focus,
            enabled,
            value_width,
        ));
    }
    lines.push(Line::from(""));

    if form.saving {
        lines.push(Line::styled("  Saving...", Style::default().fg(Color::Yellow)));
    } else if let Some(error) = &form.error {
        lines.push(error_line(error));
    } else {
        lines.push(Line::styled("  * required", Style::default().fg(Color::DarkGray)));
    }
    lines.push(hint_line(&[
        ("Tab", "Next"),
        ("←→", "Choose"),
        ("Enter", "Save"),
        ("Esc", "Cancel"),
    ]));

    let inner = dialog_frame(
        frame,
        &form.title(),
        Color::Cyan,
        DIALOG_WIDTH,
        dialog_height(lines.len()),
    );
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_filter(app: &App, frame: &mut Frame, focus: usize) {
    let Some(page) = app.list_page() else {
        return;
    };
    let filter = page.filter();
    let snapshot = filter.snapshot();
    let value_width = usize::from(DIALOG_WIDTH).saturating_sub(4 + LABEL_WIDTH);

    let mut lines = vec![Line::from("")];
    for (i, &field) in page.filter_fields().iter().enumerate() {
        lines.push(field_line(
            field.label(),
            &filter.display(field, &snapshot),
            field.kind(),
            i == focus,
            filter.selectable(field),
            value_width,
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "  Changes apply right away",
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(hint_line(&[
        ("Tab", "Next"),
        ("←→", "Choose"),
        ("Space", "Toggle"),
        ("Del", "Clear"),
        ("Esc", "Close"),
    ]));

    let inner = dialog_frame(
        frame,
        &format!(" Filter {} ", page.kind().name()),
        Color::Cyan,
        DIALOG_WIDTH,
        dialog_height(lines.len()),
    );
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_confirm(
    frame: &mut Frame,
    title: &str,
    question: &str,
    item_name: Option<&str>,
    focus: usize,
) {
    let cancel_style = if focus == CONFIRM_CANCEL {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    let accept_style = if focus == CONFIRM_ACCEPT {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let mut lines = vec![
        Line::from(""),
        Line::styled(format!("  {question}"), Style::default().fg(Color::White)),
    ];
    if let Some(name) = item_name {
        lines.push(Line::styled(
            format!("  \"{}\"", fit_width(name, 40)),
            Style::default().fg(Color::Yellow),
        ));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(" Cancel ", cancel_style),
        Span::raw("    "),
        Span::styled(" Delete ", accept_style),
    ]));

    let inner = dialog_frame(frame, title, Color::Red, 48, dialog_height(lines.len() + 1));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_upload(frame: &mut Frame, path: &str, error: Option<&str>, uploading: bool) {
    let width: u16 = 64;
    let input_width = usize::from(width).saturating_sub(8);

    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "Image file (PNG, JPG, JPEG or WEBP)",
            Style::default().fg(Color::Gray),
        ),
        Line::styled(
            format!("  {}", fit_width(&with_cursor(path, !uploading), input_width)),
            Style::default().fg(Color::Cyan),
        ),
        Line::from(""),
    ];
    if uploading {
        lines.push(Line::styled("  Uploading...", Style::default().fg(Color::Yellow)));
    } else if let Some(error) = error {
        lines.push(error_line(error));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(hint_line(&[("Enter", "Upload"), ("Esc", "Cancel")]));

    let inner = dialog_frame(frame, " Upload Image ", Color::Cyan, width, dialog_height(lines.len()));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_help(frame: &mut Frame) {
    let heading = |text: &'static str| {
        Line::styled(
            text,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let key = |keys: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<9}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        heading("Global"),
        key("Tab", "Switch panel"),
        key("↑↓ / jk", "Move"),
        key("Enter", "Open / edit"),
        key("Esc", "Back / cancel"),
        key("Alt+r", "Reload"),
        key("Alt+q", "Quit"),
        Line::from(""),
        heading("Lists"),
        key("Alt+a", "Add"),
        key("Alt+e", "Edit"),
        key("Alt+d", "Delete"),
        key("Alt+f", "Filter"),
        Line::from(""),
        heading("Landmark"),
        key("Alt+u", "Upload image"),
        key("Alt+x", "Remove image"),
        Line::from(""),
        heading("Dialogs"),
        key("←→", "Choose an option"),
        key("Del", "Clear the field"),
        Line::from(""),
        Line::styled("Press Esc to close the help", Style::default().fg(Color::DarkGray)),
    ];

    let inner = dialog_frame(frame, " Help ", Color::Cyan, 48, dialog_height(lines.len()));
    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_fits_a_small_terminal() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(72, 20, area);
        assert_eq!(rect, Rect::new(0, 0, 40, 10));

        let rect = centered_rect(20, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }

    #[test]
    fn focused_select_shows_arrows() {
        let line = field_line("Country *", "Poland", FieldKind::Select, true, true, 30);
        assert_eq!(line.spans[1].content, "◀ Poland ▶");

        let line = field_line("Region", "None", FieldKind::Select, true, false, 30);
        assert_eq!(line.spans[1].content, "None");
    }
}
