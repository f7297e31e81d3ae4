//! Persisted login flag.
//!
//! The flag lives in a string key/value store so it survives reloads: browser local storage on
//! the web, eframe's storage file on native.

use std::collections::BTreeMap;

use log::info;
use userdesk_states::State;

pub const LOGIN_KEY: &str = "isLogin";
pub const TOKEN_KEY: &str = "accessToken";

/// String key/value persistence used by [`Session`].
pub trait SessionStorage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-process storage, handy for tests and for runs without a persistence backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

pub struct Session {
    storage: Box<dyn SessionStorage>,
    logged_in: bool,
    token: Option<String>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("logged_in", &self.logged_in)
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

impl Session {
    /// Reads the flag once. Only the exact value `"true"` counts as logged in.
    pub fn load(storage: impl SessionStorage + 'static) -> Self {
        let logged_in = storage.get(LOGIN_KEY).as_deref() == Some("true");
        let token = storage.get(TOKEN_KEY).filter(|token| !token.is_empty());
        Self {
            storage: Box::new(storage),
            logged_in,
            token,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn login(&mut self) {
        info!("Session started");
        self.logged_in = true;
        self.storage.set(LOGIN_KEY, "true");
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        let token = token.into();
        self.storage.set(TOKEN_KEY, &token);
        self.token = Some(token);
    }

    /// Clears both the flag and any stored token.
    pub fn logout(&mut self) {
        info!("Session ended");
        self.logged_in = false;
        self.token = None;
        self.storage.remove(LOGIN_KEY);
        self.storage.remove(TOKEN_KEY);
    }

    pub fn storage(&self) -> &dyn SessionStorage {
        self.storage.as_ref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::load(MemoryStorage::default())
    }
}

impl State for Session {}
