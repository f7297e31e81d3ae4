//! Collection endpoint client.
//!
//! Performs the network IO for [`RemoteTable`](super::RemoteTable); results are delivered to
//! the table through its latest-only channels, never applied here.

use log::info;
use serde::Deserialize;
use serde_json::Value;

use crate::http::Client;
use crate::{Row, TableError};

/// Body of `GET <api_url>`. Missing fields fall back to empty / zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UsersPage {
    #[serde(default)]
    pub users: Vec<Row>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// A decoded page together with the raw body handed to the fetched-data callback.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedPage {
    pub page: UsersPage,
    pub raw: Value,
}

pub type ApiResult<T> = Result<T, TableError>;

/// GET `<api_url>?<params>`
pub async fn fetch_page(api_url: &str, params: &[(String, String)]) -> ApiResult<FetchedPage> {
    let request = params
        .iter()
        .fold(Client::get(api_url), |request, (name, value)| {
            request.query(name.as_str(), value.as_str())
        });

    let response = request.send().await?;

    if !response.is_success() {
        return Err(TableError::Http {
            status: response.status,
        });
    }

    let raw: Value = response
        .json()
        .map_err(|e| TableError::Decode(e.to_string()))?;
    let page: UsersPage =
        serde_json::from_value(raw.clone()).map_err(|e| TableError::Decode(e.to_string()))?;

    info!(
        "Fetched {} rows of {} from {api_url}",
        page.users.len(),
        page.total
    );

    Ok(FetchedPage { page, raw })
}
