//! Search box, export button, page-size selector and refresh button.

use chrono::NaiveDate;
use egui::{Button, ComboBox, TextEdit, Ui};
use log::warn;
use userdesk_business::RemoteTable;

const SEARCH_WIDTH: f32 = 220.0;

pub fn render_toolbar(table: &mut RemoteTable, today: NaiveDate, ui: &mut Ui) {
    ui.horizontal(|ui| {
        if table.is_searchable() {
            let mut search = table.query().search_query().to_owned();
            let response = ui.add(
                TextEdit::singleline(&mut search)
                    .hint_text("Search...")
                    .desired_width(SEARCH_WIDTH),
            );
            if response.changed() {
                table.set_search_query(&search);
            }
        }

        let export_label = if table.is_exporting() {
            "Exporting..."
        } else {
            "Export CSV"
        };
        if ui
            .add_enabled(table.can_export(), Button::new(export_label))
            .clicked()
        {
            table.export_csv(today);
        }

        ui.label("Items per page:");
        let current = table.query().items_per_page();
        let mut selected = current;
        ComboBox::from_id_salt("items_per_page")
            .selected_text(current.to_string())
            .width(60.0)
            .show_ui(ui, |ui| {
                for &option in table.config().items_per_page_options() {
                    ui.selectable_value(&mut selected, option, option.to_string());
                }
            });
        if selected != current {
            if let Err(e) = table.set_items_per_page(selected) {
                warn!("Ignoring page size change: {e}");
            }
        }

        let refresh_label = if table.is_loading() {
            "Loading..."
        } else {
            "Refresh"
        };
        if ui
            .add_enabled(!table.is_loading(), Button::new(refresh_label))
            .clicked()
        {
            table.refresh();
        }
    });
}
