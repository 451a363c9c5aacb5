use ratatui::{layout::Rect, Frame};

use super::{render_table, Column, TableView};
use crate::model::App;

const COLUMNS: &[Column] = &[
    Column { title: "Name", percent: 70 },
    Column { title: "Code", percent: 30 },
];

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let page = &app.countries;
    let snapshot = page.view.snapshot();
    let rows = snapshot
        .rows
        .iter()
        .map(|row| vec![row.name.clone(), row.code.clone()])
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
            empty: "No countries. Press Alt+a to add one.",
        },
    );
}
