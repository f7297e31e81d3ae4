//! Server-side paginated, sortable and searchable table with CSV export.

mod api;
mod column;
mod config;
mod export;
mod pagination;
mod query;
mod remote;

pub use api::{ApiResult, FetchedPage, UsersPage, fetch_page};
pub use column::{Cell, CellRenderer, ColumnDef, RowAction, RowActionKind, Tone};
pub use config::{
    DEFAULT_FILE_NAME, DEFAULT_ITEMS_PER_PAGE, DEFAULT_ITEMS_PER_PAGE_OPTIONS,
    DataFetchedCallback, TableConfig,
};
pub use export::{
    CsvExport, EXPORT_ROW_LIMIT, build_csv, export_file_name, export_limit, quote_field,
};
pub use pagination::{PAGE_WINDOW_SIZE, Pagination, entries_summary, page_window, total_pages};
pub use query::{QueryState, SortDirection};
pub use remote::{FetchStatus, RemoteTable};
