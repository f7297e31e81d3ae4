use chrono::{NaiveDate, Utc};
use log::{error, info, warn};
use userdesk_business::{BusinessConfig, MemoryStorage, Route, Session, UsersTable};
use userdesk_states::{StateCtx, Time};

use crate::utils::location;

/// Username and password typed on the login page. Neither is validated.
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl userdesk_states::State for LoginForm {}

/// The main application state.
///
/// Every piece of state lives in the [`StateCtx`]; the helpers here are the one read/write path
/// for the session and the current route.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        let config = BusinessConfig::from_env().unwrap_or_else(|e| {
            warn!("Ignoring invalid environment configuration: {e}");
            BusinessConfig::default()
        });
        Self::new(config, Session::default(), location::initial_route())
    }
}

impl State {
    pub fn new(config: BusinessConfig, session: Session, route: Route) -> Self {
        let mut ctx = StateCtx::new();

        match UsersTable::new(&config) {
            Ok(table) => ctx.add_state(table),
            Err(e) => error!("Users table is unavailable: {e}"),
        }

        ctx.add_state(Time::default());
        ctx.add_state(config);
        ctx.add_state(LoginForm::default());
        ctx.add_state(route.guard(&session));
        ctx.add_state(session);

        Self { ctx }
    }

    /// Logged out, on the login page, talking to `base_url`.
    pub fn test(base_url: String) -> Self {
        Self::new(
            BusinessConfig::new(base_url),
            Session::load(MemoryStorage::default()),
            Route::Login,
        )
    }

    /// Logged in and showing `route`.
    pub fn test_logged_in(base_url: String, route: Route) -> Self {
        let mut session = Session::load(MemoryStorage::default());
        session.login();
        Self::new(BusinessConfig::new(base_url), session, route)
    }

    pub fn session(&self) -> Option<&Session> {
        self.ctx.try_state::<Session>().ok()
    }

    pub fn is_logged_in(&self) -> bool {
        self.ctx
            .try_state::<Session>()
            .is_ok_and(Session::is_logged_in)
    }

    /// The page to render, after the session guard.
    pub fn route(&self) -> Route {
        let route = self.ctx.try_state::<Route>().copied().unwrap_or_default();
        match self.ctx.try_state::<Session>() {
            Ok(session) => route.guard(session),
            Err(_) => route,
        }
    }

    pub fn navigate(&mut self, route: Route) {
        let target = match self.ctx.try_state::<Session>() {
            Ok(session) => route.guard(session),
            Err(_) => route,
        };
        if self.ctx.try_state::<Route>().is_ok_and(|current| *current == target) {
            return;
        }
        info!("Navigating to {}", target.path());
        self.ctx.add_state(target);
        location::push_route(target);
    }

    /// Re-applies the guard to the stored route, e.g. after the session changed.
    pub fn sync_route(&mut self) {
        let guarded = self.route();
        if self.ctx.try_state::<Route>().is_ok_and(|current| *current != guarded) {
            self.navigate(guarded);
        }
    }

    pub fn login(&mut self) {
        if let Ok(session) = self.ctx.try_state_mut::<Session>() {
            session.login();
        }
        self.navigate(Route::Dashboard);
    }

    pub fn logout(&mut self) {
        if let Ok(session) = self.ctx.try_state_mut::<Session>() {
            session.logout();
        }
        self.ctx.add_state(LoginForm::default());
        self.navigate(Route::Login);
    }

    pub fn today(&self) -> NaiveDate {
        self.ctx
            .try_state::<Time>()
            .map_or_else(|_| Utc::now().date_naive(), Time::today)
    }

    pub fn tick(&mut self) {
        if let Ok(time) = self.ctx.try_state_mut::<Time>() {
            time.tick();
        }
    }

    /// Applies finished fetches. Returns whether anything changed.
    pub fn sync_tables(&mut self) -> bool {
        self.ctx
            .try_state_mut::<UsersTable>()
            .is_ok_and(|table| table.sync())
    }

    /// True while a table is waiting on the network.
    pub fn is_busy(&self) -> bool {
        self.ctx
            .try_state::<UsersTable>()
            .is_ok_and(|table| table.is_loading() || table.is_exporting())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_state_lands_on_login() {
        let mut state = State::test("http://localhost:1".to_owned());
        assert_eq!(state.route(), Route::Login);

        state.navigate(Route::Users);
        assert_eq!(state.route(), Route::Login);
    }

    #[test]
    fn login_goes_to_dashboard_and_logout_back() {
        let mut state = State::test("http://localhost:1".to_owned());
        state.login();
        assert!(state.is_logged_in());
        assert_eq!(state.route(), Route::Dashboard);

        state.navigate(Route::Users);
        assert_eq!(state.route(), Route::Users);

        state.logout();
        assert!(!state.is_logged_in());
        assert_eq!(state.route(), Route::Login);
    }

    #[test]
    fn logged_in_state_skips_login_page() {
        let state = State::test_logged_in("http://localhost:1".to_owned(), Route::Login);
        assert_eq!(state.route(), Route::Dashboard);
    }

    #[test]
    fn not_found_is_reachable_anonymously() {
        let mut state = State::test("http://localhost:1".to_owned());
        state.navigate(Route::NotFound);
        assert_eq!(state.route(), Route::NotFound);
    }

    #[test]
    fn users_table_is_registered() {
        let state = State::test("http://localhost:1".to_owned());
        assert!(state.ctx.has_state::<UsersTable>());
        assert!(!state.is_busy());
    }
}
