use std::time::Duration;

use egui_kittest::Harness;
use serde_json::{Value, json};
use userdesk_business::Route;
use userdesk_ui::UserdeskApp;
use userdesk_ui::state::State;
use userdesk_ui::utils::download::RecordingDownloadHandler;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Large enough that the toolbar, a page of rows and the pagination all fit on screen.
const WINDOW_SIZE: egui::Vec2 = egui::vec2(1600.0, 1000.0);

pub struct TestCtx<'a, T = UserdeskApp> {
    mock_server: MockServer,
    downloads: RecordingDownloadHandler,
    harness: Harness<'a, T>,
}

impl<'a, T> TestCtx<'a, T> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, T> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, T> {
        &self.harness
    }

    #[allow(unused)]
    pub fn mock_server(&self) -> &MockServer {
        &self.mock_server
    }

    #[allow(unused)]
    pub fn downloads(&self) -> &RecordingDownloadHandler {
        &self.downloads
    }

    /// Steps frames while giving spawned requests time to finish.
    #[allow(unused)]
    pub async fn settle(&mut self) {
        for _ in 0..20 {
            self.harness.step();
            tokio::time::sleep(Duration::from_millis(25)).await;
        }
        self.harness.step();
    }
}

impl<'a> TestCtx<'a, UserdeskApp> {
    /// Logged out, on the login page. `/users` answers with a default page.
    #[allow(unused)]
    pub async fn new_app() -> Self {
        let mock_server = start_server().await;
        mount_users(&mock_server, 200, users_body(10, 95, 0)).await;
        let state = State::test(mock_server.uri());
        Self::with_state(mock_server, state)
    }

    /// Logged in and showing `route`. Nothing is mounted on the server yet.
    #[allow(unused)]
    pub async fn logged_in(route: Route) -> Self {
        let mock_server = start_server().await;
        let state = State::test_logged_in(mock_server.uri(), route);
        Self::with_state(mock_server, state)
    }

    fn with_state(mock_server: MockServer, state: State) -> Self {
        let downloads = RecordingDownloadHandler::default();
        let app = UserdeskApp::with_download_handler(state, Box::new(downloads.clone()));
        let harness = Harness::builder()
            .with_size(WINDOW_SIZE)
            .build_eframe(|_| app);

        Self {
            mock_server,
            downloads,
            harness,
        }
    }
}

async fn start_server() -> MockServer {
    let _ = env_logger::builder().is_test(true).try_init();
    MockServer::start().await
}

/// Answers every `GET /users` with `status` and `body`.
#[allow(unused)]
pub async fn mount_users(server: &MockServer, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// A `{ users, total, skip, limit }` body with `count` generated users named after `skip`.
#[allow(unused)]
pub fn users_body(count: u64, total: u64, skip: u64) -> Value {
    let users: Vec<Value> = (0..count)
        .map(|i| {
            let n = skip + i;
            json!({
                "id": n + 1,
                "firstName": format!("First{n}"),
                "lastName": format!("Last{n}"),
                "email": format!("user{n}@example.com"),
                "age": 20 + i,
                "gender": "female",
                "role": if n == 0 { "admin" } else { "user" },
                "company": { "name": "Acme" },
                "address": { "city": "Springfield", "state": "Ohio" }
            })
        })
        .collect();

    json!({ "users": users, "total": total, "skip": skip, "limit": count })
}
