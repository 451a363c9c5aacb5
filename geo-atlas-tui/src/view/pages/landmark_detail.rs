//! One landmark with its image panel

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use geo_atlas_client::{AccessibilityStatus, LandmarkDetails, PhysicalCondition, ProtectionStatus};
use geo_atlas_core::services::DetailState;
use geo_atlas_core::utils::labels::format_enum;

use crate::model::App;
use crate::view::theme::{colors, Styles};

const LABEL_WIDTH: usize = 22;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let Some(detail) = &app.detail else {
        return;
    };

    match detail.view.state() {
        DetailState::Loading => render_message(frame, area, "Loading landmark..."),
        DetailState::NotFound => render_message(
            frame,
            area,
            "This landmark does not exist. Press Esc to go back to the list.",
        ),
        DetailState::Unavailable => render_message(
            frame,
            area,
            "The landmark could not be loaded. Press Alt+r to try again.",
        ),
        DetailState::Loaded(landmark) => {
            let [info_area, image_area] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(6)]).areas(area);
            render_info(frame, info_area, &landmark);
            let image_url = app
                .services
                .config
                .resolve_image_url(
                    landmark
                        .image_url
                        .as_deref()
                        .or(landmark.uploaded_image_path.as_deref()),
                );
            render_image_panel(frame, image_area, &landmark, image_url, detail.busy);
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, text: &str) {
    let lines = vec![Line::from(""), Line::styled(format!("  {text}"), Styles::muted())];
    frame.render_widget(Paragraph::new(lines), area);
}

fn row(label: &str, value: String) -> Line<'static> {
    let pad = LABEL_WIDTH.saturating_sub(label.width());
    Line::from(vec![
        Span::styled(format!("  {label}{}", " ".repeat(pad)), Styles::muted()),
        Span::styled(value, Style::default().fg(colors().fg)),
    ])
}

fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("-")
        .to_string()
}

fn render_info(frame: &mut Frame, area: Rect, landmark: &LandmarkDetails) {
    let coordinates = match (landmark.latitude, landmark.longitude) {
        (Some(lat), Some(lon)) => format!("{lat}, {lon}"),
        (Some(lat), None) => format!("{lat}, -"),
        (None, Some(lon)) => format!("-, {lon}"),
        (None, None) => "-".to_string(),
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", landmark.name),
            Styles::title().add_modifier(Modifier::UNDERLINED),
        ),
        Line::from(""),
        row("Country", landmark.country_name.clone()),
        row("Region", or_dash(landmark.region_name.as_deref())),
        row("City", landmark.city_name.clone()),
        row("Address", or_dash(landmark.address.as_deref())),
        row("Coordinates", coordinates),
        row(
            "First mentioned",
            landmark
                .first_mention_year
                .map_or_else(|| "-".to_string(), |y| y.to_string()),
        ),
        Line::from(""),
        row(
            "Protection status",
            format_enum::<ProtectionStatus>(Some(landmark.protection_status)),
        ),
        row(
            "Physical condition",
            format_enum::<PhysicalCondition>(Some(landmark.physical_condition)),
        ),
        row(
            "Accessibility",
            format_enum::<AccessibilityStatus>(Some(landmark.accessibility_status)),
        ),
        row(
            "Registry",
            or_dash(landmark.external_registry_url.as_deref()),
        ),
        Line::from(""),
        row("Description", or_dash(landmark.description.as_deref())),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_image_panel(
    frame: &mut Frame,
    area: Rect,
    landmark: &LandmarkDetails,
    image_url: Option<String>,
    busy: bool,
) {
    let c = colors();
    let block = Block::default()
        .title(" Image ")
        .title_style(Styles::title())
        .borders(Borders::TOP)
        .border_style(Styles::border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();
    if busy {
        lines.push(Line::styled("  Working...", Style::default().fg(c.warning)));
    }
    match image_url {
        Some(url) => {
            lines.push(row("URL", url));
            if let Some(path) = &landmark.uploaded_image_path {
                lines.push(row("Stored as", path.clone()));
            }
        }
        None => lines.push(Line::styled("  No image uploaded", Styles::muted())),
    }
    lines.push(Line::from(vec![
        Span::styled("  Alt+u", Styles::hint_key()),
        Span::styled(" Upload  ", Styles::hint_desc()),
        Span::styled("Alt+x", Styles::hint_key()),
        Span::styled(" Remove", Styles::hint_desc()),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_show_a_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some("  ")), "-");
        assert_eq!(or_dash(Some("ul. Grodzka 1")), "ul. Grodzka 1");
    }
}
