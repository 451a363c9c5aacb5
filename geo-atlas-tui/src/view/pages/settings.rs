//! Console settings

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use geo_atlas_core::config::API_ORIGIN_ENV;

use crate::model::App;
use crate::view::theme::{colors, Styles};

const LABEL_WIDTH: usize = 16;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus.is_content();

    let lines = vec![
        Line::from(""),
        setting_row("Theme", app.settings.theme.label(), focused),
        info_row("API origin", app.services.config.origin()),
        Line::from(""),
        Line::styled(
            format!("  The API origin comes from {API_ORIGIN_ENV} and is read at startup."),
            Styles::muted(),
        ),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ←→", Style::default().fg(Color::Yellow)),
            Span::styled(" Change | ", Styles::hint_desc()),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::styled(" Menu", Styles::hint_desc()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}

fn label_span(label: &str, style: Style) -> Span<'static> {
    let pad = LABEL_WIDTH.saturating_sub(label.width());
    Span::styled(format!("  {label}{}: ", " ".repeat(pad)), style)
}

/// A row that ←/→ changes while the page has focus.
fn setting_row(label: &str, value: &str, selected: bool) -> Line<'static> {
    let c = colors();
    if selected {
        Line::from(vec![
            Span::styled("▶", Style::default().fg(c.highlight)),
            label_span(label, Style::default().fg(c.fg).add_modifier(Modifier::BOLD)),
            Span::styled("◀ ", Style::default().fg(Color::Yellow)),
            Span::styled(
                value.to_string(),
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ▶", Style::default().fg(Color::Yellow)),
        ])
    } else {
        Line::from(vec![
            Span::raw(" "),
            label_span(label, Styles::muted()),
            Span::styled(format!("  {value}"), Style::default().fg(c.highlight)),
        ])
    }
}

fn info_row(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(" "),
        label_span(label, Styles::muted()),
        Span::styled(format!("  {value}"), Style::default().fg(colors().fg)),
    ])
}
