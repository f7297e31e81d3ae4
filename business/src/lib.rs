//! Business layer of the user desk: the remote-paginated data table, the session flag and the
//! route guard. Nothing in here depends on egui; the UI crate only reads these types and calls
//! their handlers.

mod config;
mod error;
pub mod http;
mod route;
mod row;
mod session;
pub mod table;
mod users;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod test_utils;

pub use config::BusinessConfig;
pub use error::{EXPORT_FAILED_MESSAGE, FETCH_FAILED_MESSAGE, TableError};
pub use route::Route;
pub use row::{FieldValue, Row, resolve};
pub use session::{LOGIN_KEY, MemoryStorage, Session, SessionStorage, TOKEN_KEY};
pub use table::{
    Cell, ColumnDef, CsvExport, FetchStatus, Pagination, QueryState, RemoteTable, RowAction,
    RowActionKind, SortDirection, TableConfig, Tone,
};
pub use users::{UsersTable, users_columns, users_table_config};
