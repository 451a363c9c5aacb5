//! Frame layout

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// Draws the whole frame: title bar, navigation, page, status bar, then the dialog.
pub fn render(app: &App, frame: &mut Frame) {
    let c = colors();
    frame.render_widget(
        Block::default().style(Style::default().bg(c.bg).fg(c.fg)),
        frame.area(),
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title_bar(app, frame, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(20), Constraint::Percentage(80)])
        .split(rows[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, rows[2]);

    // Dialogs go on top.
    components::modal::render(app, frame);
}

fn render_title_bar(app: &App, frame: &mut Frame, area: Rect) {
    let title = format!(
        " Geo Atlas v{} · {}",
        env!("CARGO_PKG_VERSION"),
        app.services.config.origin()
    );
    frame.render_widget(Paragraph::new(title).style(Styles::statusbar()), area);
}

fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.current_page.title()))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &app.current_page {
        Page::Countries => pages::countries::render(app, frame, inner),
        Page::Regions => pages::regions::render(app, frame, inner),
        Page::Cities => pages::cities::render(app, frame, inner),
        Page::Landmarks => pages::landmarks::render(app, frame, inner),
        Page::LandmarkDetail { .. } => pages::landmark_detail::render(app, frame, inner),
        Page::Settings => pages::settings::render(app, frame, inner),
    }
}
