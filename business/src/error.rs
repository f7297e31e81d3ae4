use thiserror::Error;

/// Message shown in the table's error slot when loading a page fails.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data. Please try again later.";

/// Message shown in the table's error slot when a CSV export fails.
pub const EXPORT_FAILED_MESSAGE: &str = "Failed to export data. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("API returned status: {status}")]
    Http { status: u16 },
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Failed to decode response: {0}")]
    Decode(String),
    #[error("{requested} is not an allowed page size (allowed: {allowed:?})")]
    UnsupportedPageSize { requested: u32, allowed: Vec<u32> },
    #[error(transparent)]
    Runtime(#[from] userdesk_states::Error),
}
