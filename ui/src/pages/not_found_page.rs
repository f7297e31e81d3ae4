use egui::{Response, Ui};
use userdesk_business::Route;

use crate::state::State;

pub fn not_found_page(state: &mut State, ui: &mut Ui) -> Response {
    ui.vertical(|ui| {
        ui.heading("Not Found");
        ui.add_space(8.0);
        if ui.button("Home").clicked() {
            state.navigate(Route::Login);
        }
    })
    .response
}
