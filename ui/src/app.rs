use std::time::Duration;

use userdesk_business::{Route, UsersTable};

use crate::utils::download::{DownloadHandler, SystemDownloadHandler};
use crate::utils::session_storage;
use crate::{pages, state::State, widgets};

/// How often to poll for network results while a request is in flight.
const BUSY_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

pub struct UserdeskApp {
    state: State,
    downloads: Box<dyn DownloadHandler>,
}

impl UserdeskApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self::with_download_handler(state, Box::new(SystemDownloadHandler))
    }

    pub fn with_download_handler(state: State, downloads: Box<dyn DownloadHandler>) -> Self {
        Self { state, downloads }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    fn deliver_downloads(&mut self) {
        let Ok(table) = self.state.ctx.try_state_mut::<UsersTable>() else {
            return;
        };
        if let Some(export) = table.take_download() {
            self.downloads.deliver(export);
        }
    }
}

impl eframe::App for UserdeskApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.tick();
        self.state.sync_route();

        // Apply network results before drawing
        if self.state.sync_tables() {
            ctx.request_repaint();
        }
        self.deliver_downloads();

        egui::TopBottomPanel::top("nav_panel").show(ctx, |ui| {
            widgets::nav_bar(&mut self.state, ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.state.route() {
            Route::Login => {
                pages::login_page(&mut self.state, ui);
            }
            Route::Dashboard => {
                pages::dashboard_page(&self.state, ui);
            }
            Route::Users => {
                pages::users_page(&mut self.state, ui);
            }
            Route::NotFound => {
                pages::not_found_page(&mut self.state, ui);
            }
        });

        if self.state.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT_INTERVAL);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Some(session) = self.state.session() {
            session_storage::save_session(session, storage);
        }
    }
}
