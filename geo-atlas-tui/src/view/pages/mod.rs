//! Page bodies
//!
//! The four list pages share [`render_table`]; the detail and settings pages draw
//! their own layout.

pub mod cities;
pub mod countries;
pub mod landmark_detail;
pub mod landmarks;
pub mod regions;
pub mod settings;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use geo_atlas_client::GeoId;
use geo_atlas_core::selection::TierSnapshot;

use crate::model::state::ListPage;
use crate::util::fit_width;
use crate::view::theme::{colors, Styles};

/// Column of a list page: header text and share of the row width in percent.
pub struct Column {
    pub title: &'static str,
    pub percent: u16,
}

/// What a list page hands to [`render_table`].
pub struct TableView<'a> {
    pub page: &'a dyn ListPage,
    pub columns: &'a [Column],
    pub rows: Vec<Vec<String>>,
    pub loading: bool,
    pub cursor: Option<usize>,
    pub empty: &'a str,
}

/// Filter line, column headers and the rows.
pub fn render_table(frame: &mut Frame, area: Rect, table: TableView<'_>) {
    let [filter_area, header_area, rows_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(filter_line(table.page)), filter_area);

    let widths = column_widths(table.columns, usize::from(area.width));
    let titles: Vec<String> = table.columns.iter().map(|c| c.title.to_string()).collect();
    frame.render_widget(
        Paragraph::new(row_line(&titles, &widths, Styles::title().add_modifier(Modifier::UNDERLINED))),
        header_area,
    );

    if table.rows.is_empty() {
        let text = if table.loading { "Loading..." } else { table.empty };
        frame.render_widget(
            Paragraph::new(vec![Line::from(""), Line::styled(format!("  {text}"), Styles::muted())]),
            rows_area,
        );
        return;
    }

    let c = colors();
    let items: Vec<ListItem> = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let style = if Some(i) == table.cursor {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(row_line(row, &widths, style))
        })
        .collect();

    let list = List::new(items).highlight_style(Styles::selected());
    let mut state = ListState::default();
    state.select(table.cursor);
    frame.render_stateful_widget(list, rows_area, &mut state);
}

fn filter_line(page: &dyn ListPage) -> Line<'static> {
    let mut spans = vec![Span::styled(" Filter: ", Styles::muted())];
    match page.filter().summary(page.filter_fields()) {
        Some(summary) => spans.push(Span::styled(summary, Style::default().fg(colors().warning))),
        None => spans.push(Span::styled("none", Styles::muted())),
    }
    spans.push(Span::styled("  (Alt+f)", Styles::hint_desc()));
    Line::from(spans)
}

/// Column widths in terminal cells, one space of padding included.
fn column_widths(columns: &[Column], total: usize) -> Vec<usize> {
    let usable = total.saturating_sub(1);
    columns
        .iter()
        .map(|c| usable * usize::from(c.percent) / 100)
        .collect()
}

fn row_line(cells: &[String], widths: &[usize], style: Style) -> Line<'static> {
    let mut text = String::from(" ");
    for (cell, &width) in cells.iter().zip(widths) {
        let cell = fit_width(cell, width.saturating_sub(1));
        let pad = width.saturating_sub(cell.width());
        text.push_str(&cell);
        text.push_str(&" ".repeat(pad));
    }
    Line::styled(text, style)
}

/// Name of `id` in a cascade tier, or the bare id while the options are missing.
pub fn tier_name(tier: &TierSnapshot, id: Option<GeoId>) -> String {
    match (tier.find(id), id) {
        (Some(option), _) => option.name.clone(),
        (None, Some(id)) => format!("#{id}"),
        (None, None) => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_atlas_core::GeoOption;

    #[test]
    fn widths_split_the_row() {
        let columns = [
            Column { title: "Name", percent: 60 },
            Column { title: "Code", percent: 40 },
        ];
        assert_eq!(column_widths(&columns, 101), vec![60, 40]);
    }

    #[test]
    fn cells_are_cut_and_padded() {
        let line = row_line(
            &["Kraków".to_string(), "PL".to_string()],
            &[5, 4],
            Style::default(),
        );
        assert_eq!(line.spans[0].content, " Kra… PL  ");
    }

    #[test]
    fn tier_names_fall_back_to_ids() {
        let tier = TierSnapshot {
            options: vec![GeoOption::new(GeoId(1), "Poland").with_auxiliary("PL")],
            loading: false,
        };
        assert_eq!(tier_name(&tier, Some(GeoId(1))), "Poland");
        assert_eq!(tier_name(&tier, Some(GeoId(2))), "#2");
        assert_eq!(tier_name(&tier, None), "-");
    }
}
