//! Thin GET client used by the table.
//!
//! `reqwest` works on both native and wasm targets; on wasm it drives the browser `fetch`
//! API, so the futures here are not `Send` there. That is fine because wasm tasks are spawned
//! with `spawn_local`.

use crate::TableError;

/// A response reduced to what the table needs.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    /// Returns true if the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Attempt to deserialize the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// A GET request with ordered query parameters.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    url: String,
    query: Vec<(String, String)>,
}

impl RequestBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter; values are percent-encoded on send.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub async fn send(self) -> Result<Response, TableError> {
        let client = reqwest::Client::new();

        let response = client
            .get(&self.url)
            .query(&self.query)
            .send()
            .await
            .map_err(|e| TableError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TableError::Transport(e.to_string()))?
            .to_vec();

        Ok(Response { status, body })
    }
}

pub struct Client;

impl Client {
    /// Create a GET request.
    pub fn get(url: impl Into<String>) -> RequestBuilder {
        RequestBuilder::new(url)
    }
}
