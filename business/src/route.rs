//! Route state for page navigation.
//!
//! This module defines the route enum that determines which page to display, and the guard
//! that keeps anonymous visitors on the login page.

use serde::{Deserialize, Serialize};
use userdesk_states::State;

use crate::Session;

/// Represents the current page/route of the application.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    /// Login page, also served at `/`
    #[default]
    Login,
    Dashboard,
    Users,
    /// Any path nothing else matches
    NotFound,
}

impl Route {
    /// Maps a location path to a route. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        match normalized {
            "/" | "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/users" => Self::Users,
            _ => Self::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Users => "/users",
            Self::NotFound => "/404",
        }
    }

    /// Pages that require a session.
    pub fn is_protected(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Users)
    }

    /// Resolves where a visitor actually lands.
    ///
    /// Protected pages send anonymous visitors to the login page, and a logged-in visitor on
    /// the login page goes to the dashboard. The not-found page is reachable either way.
    pub fn guard(self, session: &Session) -> Self {
        match (self, session.is_logged_in()) {
            (route, false) if route.is_protected() => Self::Login,
            (Self::Login, true) => Self::Dashboard,
            (route, _) => route,
        }
    }
}

impl State for Route {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStorage;

    fn session(logged_in: bool) -> Session {
        let mut session = Session::load(MemoryStorage::default());
        if logged_in {
            session.login();
        }
        session
    }

    #[test]
    fn test_route_default_is_login() {
        assert_eq!(Route::default(), Route::Login);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Route::from_path("/"), Route::Login);
        assert_eq!(Route::from_path(""), Route::Login);
        assert_eq!(Route::from_path("/login"), Route::Login);
        assert_eq!(Route::from_path("/dashboard"), Route::Dashboard);
        assert_eq!(Route::from_path("/users/"), Route::Users);
        assert_eq!(Route::from_path("/settings"), Route::NotFound);
        assert_eq!(Route::from_path("/users/1"), Route::NotFound);
    }

    #[test]
    fn test_path_round_trips_for_known_pages() {
        for route in [Route::Login, Route::Dashboard, Route::Users] {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_guard_without_session() {
        let anonymous = session(false);
        assert_eq!(Route::Dashboard.guard(&anonymous), Route::Login);
        assert_eq!(Route::Users.guard(&anonymous), Route::Login);
        assert_eq!(Route::Login.guard(&anonymous), Route::Login);
        assert_eq!(Route::NotFound.guard(&anonymous), Route::NotFound);
    }

    #[test]
    fn test_guard_with_session() {
        let logged_in = session(true);
        assert_eq!(Route::Login.guard(&logged_in), Route::Dashboard);
        assert_eq!(Route::Users.guard(&logged_in), Route::Users);
        assert_eq!(Route::Dashboard.guard(&logged_in), Route::Dashboard);
        assert_eq!(Route::NotFound.guard(&logged_in), Route::NotFound);
    }
}
