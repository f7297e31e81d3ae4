use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::{ColumnDef, SortDirection};

/// Called with the raw response body after every successful page fetch.
pub type DataFetchedCallback = Arc<dyn Fn(&Value) + Send + Sync>;

pub const DEFAULT_ITEMS_PER_PAGE_OPTIONS: [u32; 4] = [10, 20, 30, 50];
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;
pub const DEFAULT_FILE_NAME: &str = "table-data";

/// Static configuration of one [`RemoteTable`](super::RemoteTable).
///
/// ```ignore
/// let config = TableConfig::builder()
///     .columns(columns)
///     .api_url("https://dummyjson.com/users")
///     .default_sort_field("lastName")
///     .search_fields(vec!["firstName".into()])
///     .build();
/// ```
#[derive(Clone, bon::Builder)]
pub struct TableConfig {
    columns: Vec<ColumnDef>,
    #[builder(into)]
    api_url: String,
    #[builder(default = DEFAULT_ITEMS_PER_PAGE_OPTIONS.to_vec())]
    items_per_page_options: Vec<u32>,
    #[builder(default = DEFAULT_ITEMS_PER_PAGE)]
    default_items_per_page: u32,
    #[builder(into)]
    default_sort_field: Option<String>,
    #[builder(default)]
    default_sort_direction: SortDirection,
    #[builder(default)]
    search_fields: Vec<String>,
    on_data_fetched: Option<DataFetchedCallback>,
    #[builder(into, default = DEFAULT_FILE_NAME.to_owned())]
    file_name: String,
}

impl TableConfig {
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn column(&self, key: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.key() == key)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn items_per_page_options(&self) -> &[u32] {
        &self.items_per_page_options
    }

    pub fn default_items_per_page(&self) -> u32 {
        self.default_items_per_page
    }

    pub fn default_sort_field(&self) -> Option<&str> {
        self.default_sort_field.as_deref()
    }

    pub fn default_sort_direction(&self) -> SortDirection {
        self.default_sort_direction
    }

    pub fn search_fields(&self) -> &[String] {
        &self.search_fields
    }

    pub fn is_searchable(&self) -> bool {
        !self.search_fields.is_empty()
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn allows_items_per_page(&self, items_per_page: u32) -> bool {
        self.items_per_page_options.contains(&items_per_page)
    }

    pub(crate) fn notify_data_fetched(&self, raw: &Value) {
        if let Some(callback) = &self.on_data_fetched {
            callback(raw);
        }
    }
}

impl fmt::Debug for TableConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableConfig")
            .field("columns", &self.columns)
            .field("api_url", &self.api_url)
            .field("items_per_page_options", &self.items_per_page_options)
            .field("default_items_per_page", &self.default_items_per_page)
            .field("default_sort_field", &self.default_sort_field)
            .field("default_sort_direction", &self.default_sort_direction)
            .field("search_fields", &self.search_fields)
            .field("on_data_fetched", &self.on_data_fetched.is_some())
            .field("file_name", &self.file_name)
            .finish()
    }
}
