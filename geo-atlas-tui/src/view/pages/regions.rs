use ratatui::{layout::Rect, Frame};

use super::{render_table, tier_name, Column, TableView};
use crate::model::App;

const COLUMNS: &[Column] = &[
    Column { title: "Name", percent: 45 },
    Column { title: "Type", percent: 25 },
    Column { title: "Country", percent: 30 },
];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let page = &app.regions;
    let snapshot = page.view.snapshot();
    // Country names come from the filter's option list.
    let options = page.filter.snapshot();
    let rows = snapshot
        .rows
        .iter()
        .map(|row| {
            vec![
                row.name.clone(),
                row.region_type.clone().unwrap_or_else(|| "-".to_string()),
                tier_name(&options.countries, Some(row.country_id)),
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
            empty: "No regions match the filter.",
        },
    );
}
