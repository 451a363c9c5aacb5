use ratatui::{layout::Rect, Frame};

use geo_atlas_client::{AccessibilityStatus, PhysicalCondition, ProtectionStatus};
use geo_atlas_core::utils::labels::format_enum;

use super::{render_table, Column, TableView};
use crate::model::App;

const COLUMNS: &[Column] = &[
    Column { title: "Name", percent: 28 },
    Column { title: "City", percent: 16 },
    Column { title: "Protection", percent: 18 },
    Column { title: "Condition", percent: 14 },
    Column { title: "Access", percent: 16 },
    Column { title: "Image", percent: 8 },
];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let page = &app.landmarks;
    let snapshot = page.view.snapshot();
    let rows = snapshot
        .rows
        .iter()
        .map(|row| {
            vec![
                row.name.clone(),
                row.city_name.clone(),
                format_enum::<ProtectionStatus>(Some(row.protection_status)),
                format_enum::<PhysicalCondition>(Some(row.physical_condition)),
                format_enum::<AccessibilityStatus>(Some(row.accessibility_status)),
                if row.image_url.is_some() { "yes" } else { "no" }.to_string(),
            ]
        })
        .collect();

    render_table(
        frame,
        area,
        TableView {
            page,
            columns: COLUMNS,
            cursor: page.cursor.selected(snapshot.rows.len()),
            rows,
            loading: snapshot.loading,
            empty: "No landmarks match the filter.",
        },
    );
}
