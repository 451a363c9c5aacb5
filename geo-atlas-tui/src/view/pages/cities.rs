use ratatui::{layout::Rect, Frame};

use super::{render_table, tier_name, Column, TableView};
use crate::model::App;

const COLUMNS: &[Column] = &[
    Column { title: "Name", percent: 40 },
    Column { title: "Region", percent: 30 },
    Column { title: "Country", percent: 30 },
];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let page = &app.cities;
    let snapshot = page.view.snapshot();
    // Region names are only known for the filtered country.
    let options = page.filter.snapshot();
    let rows = snapshot
        .rows
        .iter()
        .map(|row| {
            let region = match row.region_id {
                Some(id) => tier_name(&options.regions, Some(id)),
                None => "-".to_string(),
            };
            vec![
                row.name.clone(),
                region,
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
            empty: "No cities match the filter.",
        },
    );
}
