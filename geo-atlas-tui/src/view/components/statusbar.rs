//! Bottom line: key hints, or the newest toast while one is showing

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use geo_atlas_core::Severity;

use crate::model::{App, Page};
use crate::util::fit_width;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    if let Some(toast) = app.toasts.latest() {
        let message = match app.toasts.len() {
            0 | 1 => toast.message,
            n => format!("{} (+{} more, Esc to dismiss)", toast.message, n - 1),
        };
        render_toast(frame, area, toast.severity, &message);
        return;
    }

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in hints(app).iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Styles::statusbar()));
        }
        spans.push(Span::styled(*key, Styles::statusbar().add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!(" {desc}"), Styles::statusbar()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

fn render_toast(frame: &mut Frame, area: Rect, severity: Severity, message: &str) {
    let c = colors();
    let (icon, bg) = match severity {
        Severity::Success => ("✓", c.success),
        Severity::Info => ("ℹ", c.highlight),
        Severity::Warning => ("!", c.warning),
        Severity::Error => ("✗", c.error),
    };
    let text = format!(" {icon} {message}");
    let text = fit_width(&text, usize::from(area.width));
    let paragraph = Paragraph::new(text).style(
        Style::default()
            .bg(bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(paragraph, area);
}

/// Keys that do something in the current context.
fn hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.modal.is_open() {
        return vec![("Tab", "Next"), ("Enter", "Confirm"), ("Esc", "Close")];
    }
    if app.focus.is_navigation() {
        return vec![
            ("↑↓", "Move"),
            ("Enter", "Open"),
            ("Tab", "Page"),
            ("Alt+h", "Help"),
            ("Alt+q", "Quit"),
        ];
    }
    match app.current_page {
        Page::Settings => vec![("←→", "Change"), ("Tab", "Menu"), ("Alt+q", "Quit")],
        Page::LandmarkDetail { .. } => vec![
            ("Alt+e", "Edit"),
            ("Alt+u", "Upload image"),
            ("Alt+x", "Remove image"),
            ("Alt+r", "Reload"),
            ("Esc", "Back"),
        ],
        Page::Landmarks => vec![
            ("Enter", "Open"),
            ("Alt+a", "Add"),
            ("Alt+e", "Edit"),
            ("Alt+d", "Delete"),
            ("Alt+f", "Filter"),
            ("Alt+r", "Reload"),
        ],
        _ => vec![
            ("Enter", "Edit"),
            ("Alt+a", "Add"),
            ("Alt+d", "Delete"),
            ("Alt+f", "Filter"),
            ("Alt+r", "Reload"),
        ],
    }
}
