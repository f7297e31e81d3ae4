//! Previous/next buttons, a window of page links and the entries summary.

use egui::{Button, RichText, Ui};
use userdesk_business::RemoteTable;

pub fn render_pagination(table: &mut RemoteTable, ui: &mut Ui) {
    let pagination = table.pagination();
    let loading = table.is_loading();
    let mut target = None;

    if pagination.shows_page_links() {
        ui.horizontal(|ui| {
            if loading {
                ui.disable();
            }
            if ui
                .add_enabled(pagination.previous_enabled, Button::new("Previous"))
                .clicked()
            {
                target = pagination.previous_page();
            }

            for &page in &pagination.pages {
                let is_current = page == pagination.current_page;
                if ui.selectable_label(is_current, page.to_string()).clicked() && !is_current {
                    target = Some(page);
                }
            }

            if ui
                .add_enabled(pagination.next_enabled, Button::new("Next"))
                .clicked()
            {
                target = pagination.next_page();
            }
        });
    }

    ui.label(RichText::new(table.entries_summary()).small().weak());

    if let Some(page) = target {
        table.go_to_page(page);
    }
}
