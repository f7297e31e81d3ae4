//! User management page.

use egui::{Response, Ui};
use userdesk_business::UsersTable;

use crate::{state::State, utils::colors::COLOR_RED, widgets};

/// Renders the users table, starting its first fetch on first display.
pub fn users_page(state: &mut State, ui: &mut Ui) -> Response {
    let today = state.today();

    ui.vertical(|ui| {
        ui.heading("User Management");
        ui.add_space(12.0);

        let Ok(table) = state.ctx.try_state_mut::<UsersTable>() else {
            ui.colored_label(COLOR_RED, "The users table could not be created.");
            return;
        };

        table.load_if_idle();
        if let Some(action) = widgets::data_table(table, today, ui) {
            table.handle_action(&action);
        }
    })
    .response
}
