//! Login page for visitors without a session.

use egui::{Response, Ui};

use crate::{state::State, widgets};

/// Renders the login page with a centered login form.
pub fn login_page(state: &mut State, ui: &mut Ui) -> Response {
    widgets::login_widget(state, ui)
}
