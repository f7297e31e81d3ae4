//! Login form.
//!
//! Username and password are collected but never checked; pressing Login only sets the
//! session flag.

use egui::{Align, Button, Frame, Layout, Margin, Response, TextEdit, Ui};

use crate::state::{LoginForm, State};

const FORM_WIDTH: f32 = 300.0;

pub fn login_widget(state: &mut State, ui: &mut Ui) -> Response {
    let mut should_login = false;
    let Ok(form) = state.ctx.try_state_mut::<LoginForm>() else {
        return ui.label("Login is unavailable");
    };

    let response = ui
        .with_layout(Layout::top_down(Align::Center), |ui| {
            ui.add_space(40.0);
            Frame::group(ui.style())
                .inner_margin(Margin::same(16))
                .show(ui, |ui| {
                    ui.set_width(FORM_WIDTH);
                    ui.vertical_centered(|ui| {
                        ui.heading("Login");
                    });
                    ui.add_space(16.0);

                    ui.label("Username");
                    ui.add(
                        TextEdit::singleline(&mut form.username)
                            .hint_text("type your username")
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(8.0);

                    ui.label("Password");
                    let password = ui.add(
                        TextEdit::singleline(&mut form.password)
                            .password(true)
                            .hint_text("type your password")
                            .desired_width(f32::INFINITY),
                    );
                    if password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        should_login = true;
                    }

                    ui.add_space(16.0);
                    if ui
                        .add_sized([FORM_WIDTH, 32.0], Button::new("Login"))
                        .clicked()
                    {
                        should_login = true;
                    }
                });
        })
        .response;

    if should_login {
        state.login();
    }

    response
}
