//! Top navigation bar.

use egui::{Align, Layout, Ui};
use userdesk_business::Route;

use crate::state::State;

/// `Home`, or `Home -- <token>` when a token is stored.
pub fn home_label(token: Option<&str>) -> String {
    match token {
        Some(token) => format!("Home -- {token}"),
        None => "Home".to_owned(),
    }
}

/// Renders the navigation links. Protected links and the logout button only show with a
/// session.
pub fn nav_bar(state: &mut State, ui: &mut Ui) {
    let logged_in = state.is_logged_in();
    let token = state
        .session()
        .and_then(|session| session.token().map(str::to_owned));
    let current = state.route();

    let mut target = None;
    let mut logout = false;

    ui.horizontal(|ui| {
        if ui.link(home_label(token.as_deref())).clicked() {
            target = Some(Route::Login);
        }

        if logged_in {
            for (route, label) in [(Route::Dashboard, "Dashboard"), (Route::Users, "Users")] {
                if ui.selectable_label(current == route, label).clicked() {
                    target = Some(route);
                }
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Logout").clicked() {
                    logout = true;
                }
            });
        }
    });

    if logout {
        state.logout();
    } else if let Some(route) = target {
        state.navigate(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_label_shows_token() {
        assert_eq!(home_label(None), "Home");
        assert_eq!(home_label(Some("abc")), "Home -- abc");
    }
}
