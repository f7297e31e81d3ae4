//! Table header with sort buttons.

use egui::{Button, RichText, Ui};
use egui_extras::TableRow;
use userdesk_business::{ColumnDef, QueryState, SortDirection};

/// Arrow shown next to the label of the column the table is sorted by.
pub fn sort_indicator(column: &ColumnDef, query: &QueryState) -> Option<&'static str> {
    if query.sort_field() != Some(column.key()) {
        return None;
    }
    Some(match query.sort_direction() {
        SortDirection::Asc => "⬆",
        SortDirection::Desc => "⬇",
    })
}

/// Renders one header cell per column. Returns the key of a sort button clicked this frame.
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    columns: &[ColumnDef],
    query: &QueryState,
) -> Option<String> {
    let mut clicked = None;
    for column in columns {
        header.col(|ui| {
            if render_header_cell(ui, column, query) {
                clicked = Some(column.key().to_owned());
            }
        });
    }
    clicked
}

fn render_header_cell(ui: &mut Ui, column: &ColumnDef, query: &QueryState) -> bool {
    if !column.is_sortable() {
        ui.strong(column.label());
        return false;
    }

    let text = match sort_indicator(column, query) {
        Some(arrow) => format!("{} {arrow}", column.label()),
        None => column.label().to_owned(),
    };
    ui.add(Button::new(RichText::new(text).strong()).frame(false))
        .on_hover_text("Sort")
        .clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_follows_sort_state() {
        let mut query = QueryState::new(10, Some("lastName".to_owned()), SortDirection::Asc);
        let last_name = ColumnDef::new("lastName", "Last Name").sortable(true);
        let email = ColumnDef::new("email", "Email").sortable(true);

        assert_eq!(sort_indicator(&last_name, &query), Some("⬆"));
        assert_eq!(sort_indicator(&email, &query), None);

        query.toggle_sort("lastName");
        assert_eq!(sort_indicator(&last_name, &query), Some("⬇"));
    }
}
