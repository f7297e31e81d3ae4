//! Renders a [`RemoteTable`]: toolbar, error slot, sortable header, rows and pagination.
//!
//! The widget only reads table state and calls its handlers; fetching, sorting and exporting
//! all happen in the business layer.
//!
//! - `toolbar`: search, export, page size and refresh controls
//! - `header`: column labels with sort buttons
//! - `body`: one row per record, cells rendered from the column definitions
//! - `pagination`: previous/next, page links and the entries summary

mod body;
mod header;
mod pagination;
mod toolbar;

use chrono::NaiveDate;
use egui::{Align, Layout, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};
use userdesk_business::{RemoteTable, RowAction};

use crate::utils::colors::COLOR_RED;

pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 26.0;
pub const MIN_COLUMN_WIDTH: f32 = 60.0;

/// Draws the table and returns the row action clicked this frame, if any.
pub fn data_table(table: &mut RemoteTable, today: NaiveDate, ui: &mut Ui) -> Option<RowAction> {
    toolbar::render_toolbar(table, today, ui);
    ui.add_space(8.0);

    if let Some(message) = table.error_message() {
        ui.colored_label(COLOR_RED, message);
        ui.add_space(8.0);
    }

    let mut sort_key = None;
    let mut action = None;
    let column_count = table.columns().len();

    ScrollArea::horizontal().show(ui, |ui| {
        let view: &RemoteTable = table;
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(Column::auto().at_least(MIN_COLUMN_WIDTH), column_count)
            .header(HEADER_HEIGHT, |mut header| {
                sort_key = header::render_table_header(&mut header, view.columns(), view.query());
            })
            .body(|mut body| {
                action = body::render_table_body(&mut body, view);
            });
    });

    if table.rows().is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            if table.is_loading() {
                ui.spinner();
                ui.label("Loading data...");
            } else {
                ui.label("No data available");
            }
            ui.add_space(16.0);
        });
    }

    if let Some(key) = sort_key {
        table.toggle_sort(&key);
    }

    ui.add_space(8.0);
    pagination::render_pagination(table, ui);

    action
}
