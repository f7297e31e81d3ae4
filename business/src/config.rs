use std::env::vars;

use log::info;
use serde::Deserialize;
use userdesk_states::State;

/// Public demo API the desk talks to unless overridden.
pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

// Raw environment view; every variable is optional.
#[derive(Deserialize)]
struct RawConfig {
    userdesk_api_base_url: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
        }
    }

    /// Reads `USERDESK_API_BASE_URL` from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(vars())
    }

    pub fn from_vars<I, S>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let raw: RawConfig = serde_env::from_iter(vars)?;
        let config = match raw.userdesk_api_base_url {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim().trim_end_matches('/')),
            _ => Self::default(),
        };
        info!("Using API base URL {}", config.api_base_url);
        Ok(config)
    }

    /// Collection endpoint listed by the users table.
    pub fn users_url(&self) -> String {
        format!("{}/users", self.api_base_url.trim_end_matches('/'))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl State for BusinessConfig {}
