//! Row and cell rendering.

use egui::{RichText, Ui};
use egui_extras::TableBody;
use userdesk_business::{Cell, RemoteTable, RowAction};

use super::ROW_HEIGHT;
use crate::utils::colors::tone_color;

/// Renders the current page. Returns the row action clicked this frame.
pub fn render_table_body(body: &mut TableBody<'_>, table: &RemoteTable) -> Option<RowAction> {
    let mut clicked = None;

    for (index, record) in table.rows().iter().enumerate() {
        let serial = table.serial_number(index);
        body.row(ROW_HEIGHT, |mut row| {
            for column in table.columns() {
                row.col(|ui| {
                    if let Some(action) = render_cell(ui, &column.cell(record, index, serial)) {
                        clicked = Some(action);
                    }
                });
            }
        });
    }

    clicked
}

fn render_cell(ui: &mut Ui, cell: &Cell) -> Option<RowAction> {
    match cell {
        Cell::Text(text) => {
            ui.label(text);
            None
        }
        Cell::Badge { text, tone } => {
            ui.label(RichText::new(text).strong().color(tone_color(*tone)));
            None
        }
        Cell::Actions(actions) => {
            let mut clicked = None;
            ui.horizontal(|ui| {
                for action in actions {
                    if ui.small_button(action.label()).clicked() {
                        clicked = Some(action.clone());
                    }
                }
            });
            clicked
        }
    }
}
