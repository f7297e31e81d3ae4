use egui::{Response, Ui};

use crate::state::State;

pub fn dashboard_page(state: &State, ui: &mut Ui) -> Response {
    ui.heading(format!("Dashboard - {}", state.is_logged_in()))
}
