use std::sync::Arc;

use chrono::NaiveDate;
use log::{debug, error, info};
use userdesk_states::{LatestOnly, spawn};

use super::api::{ApiResult, FetchedPage, fetch_page};
use super::export::{CsvExport, build_csv, export_file_name, export_limit};
use super::pagination::{Pagination, entries_summary, total_pages};
use super::{ColumnDef, QueryState, TableConfig};
use crate::{EXPORT_FAILED_MESSAGE, FETCH_FAILED_MESSAGE, Row, TableError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

#[derive(Debug)]
struct PendingExport {
    file_name: String,
    rows: Vec<Row>,
}

/// A table whose rows live on the server.
///
/// Handlers mutate the [`QueryState`] and start a fetch; results arrive asynchronously and
/// are applied by [`RemoteTable::sync`], which the UI calls once per frame. Only the result
/// of the most recent fetch is ever applied.
#[derive(Debug)]
pub struct RemoteTable {
    config: Arc<TableConfig>,
    query: QueryState,
    status: FetchStatus,
    rows: Vec<Row>,
    total_count: u64,
    fetch_error: Option<&'static str>,
    export_error: Option<&'static str>,
    fetches: LatestOnly<ApiResult<FetchedPage>>,
    exports: LatestOnly<ApiResult<PendingExport>>,
    download: Option<CsvExport>,
}

impl RemoteTable {
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        let per_page = config.default_items_per_page();
        if !config.allows_items_per_page(per_page) {
            return Err(TableError::UnsupportedPageSize {
                requested: per_page,
                allowed: config.items_per_page_options().to_vec(),
            });
        }

        let query = QueryState::new(
            per_page,
            config.default_sort_field().map(str::to_owned),
            config.default_sort_direction(),
        );

        Ok(Self {
            config: Arc::new(config),
            query,
            status: FetchStatus::Idle,
            rows: Vec::new(),
            total_count: 0,
            fetch_error: None,
            export_error: None,
            fetches: LatestOnly::new("table page"),
            exports: LatestOnly::new("table export"),
            download: None,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn columns(&self) -> &[ColumnDef] {
        self.config.columns()
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Message for the error slot. A failed page fetch wins over a failed export.
    pub fn error_message(&self) -> Option<&'static str> {
        self.fetch_error.or(self.export_error)
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn is_exporting(&self) -> bool {
        self.exports.is_in_flight()
    }

    pub fn is_searchable(&self) -> bool {
        self.config.is_searchable()
    }

    /// Fetches the first page unless a fetch already happened.
    pub fn load_if_idle(&mut self) {
        if self.status == FetchStatus::Idle {
            self.refresh();
        }
    }

    /// Re-issues the fetch for the current query, superseding any fetch in flight.
    pub fn refresh(&mut self) {
        self.status = FetchStatus::Loading;

        let updater = self.fetches.begin();
        let url = self.config.api_url().to_owned();
        let params = self.query.page_params(self.config.is_searchable());
        info!(
            "Fetching page {} (generation {}) from {url}",
            self.query.page(),
            updater.generation()
        );

        let spawned = spawn("table page fetch", async move {
            let cancel = updater.cancellation_token();
            tokio::select! {
                () = cancel.cancelled() => {
                    debug!("Page fetch generation {} cancelled", updater.generation());
                }
                result = fetch_page(&url, &params) => {
                    updater.set(result);
                }
            }
        });

        if let Err(err) = spawned {
            self.fetches.cancel();
            self.apply_page(Err(err.into()));
        }
    }

    /// Sorting on a serial-number column does nothing.
    pub fn toggle_sort(&mut self, key: &str) -> bool {
        if self
            .config
            .column(key)
            .is_some_and(ColumnDef::is_serial_number)
        {
            return false;
        }
        self.query.toggle_sort(key);
        self.refresh();
        true
    }

    pub fn set_search_query(&mut self, query: &str) -> bool {
        if !self.query.set_search_query(query) {
            return false;
        }
        self.refresh();
        true
    }

    pub fn set_items_per_page(&mut self, items_per_page: u32) -> Result<bool, TableError> {
        if !self.config.allows_items_per_page(items_per_page) {
            return Err(TableError::UnsupportedPageSize {
                requested: items_per_page,
                allowed: self.config.items_per_page_options().to_vec(),
            });
        }
        if !self.query.set_items_per_page(items_per_page) {
            return Ok(false);
        }
        self.refresh();
        Ok(true)
    }

    /// Moves to `page`, clamped to the pages that exist.
    ///
    /// Ignored while a fetch is loading, since the page count may be about to change.
    pub fn go_to_page(&mut self, page: u32) -> bool {
        if self.is_loading() {
            debug!("Ignoring page {page} while loading");
            return false;
        }
        let last = total_pages(self.total_count, self.query.items_per_page()).max(1);
        if !self.query.set_page(page.clamp(1, last)) {
            return false;
        }
        self.refresh();
        true
    }

    pub fn previous_page(&mut self) -> bool {
        match self.pagination().previous_page() {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    pub fn next_page(&mut self) -> bool {
        match self.pagination().next_page() {
            Some(page) => self.go_to_page(page),
            None => false,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(
            self.query.page(),
            self.query.items_per_page(),
            self.total_count,
        )
    }

    pub fn entries_summary(&self) -> String {
        entries_summary(
            self.query.page(),
            self.query.items_per_page(),
            self.total_count,
        )
    }

    /// Running number of the row at `index` on the current page.
    pub fn serial_number(&self, index: usize) -> u64 {
        self.query.skip() + index as u64 + 1
    }

    pub fn can_export(&self) -> bool {
        !self.is_exporting() && !self.rows.is_empty() && self.total_count > 0
    }

    /// Starts a CSV export of up to [`EXPORT_ROW_LIMIT`](super::EXPORT_ROW_LIMIT) rows with the
    /// current sort and search. The file becomes available through
    /// [`RemoteTable::take_download`].
    pub fn export_csv(&mut self, today: NaiveDate) -> bool {
        if !self.can_export() {
            return false;
        }

        let limit = export_limit(self.total_count);
        self.export_error = None;
        let updater = self.exports.begin();
        let url = self.config.api_url().to_owned();
        let params = self
            .query
            .export_params(limit, self.config.is_searchable());
        let file_name = export_file_name(self.config.file_name(), today);
        info!("Exporting {limit} rows to {file_name}");

        let spawned = spawn("table export", async move {
            let cancel = updater.cancellation_token();
            tokio::select! {
                () = cancel.cancelled() => {
                    debug!("Export generation {} cancelled", updater.generation());
                }
                result = fetch_page(&url, &params) => {
                    updater.set(result.map(|fetched| PendingExport {
                        file_name,
                        rows: fetched.page.users,
                    }));
                }
            }
        });

        if let Err(err) = spawned {
            self.exports.cancel();
            self.apply_export(Err(err.into()));
        }
        true
    }

    /// Applies results that arrived since the last call. Returns whether anything changed.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        if let Some(result) = self.fetches.poll() {
            self.apply_page(result);
            changed = true;
        }
        if let Some(result) = self.exports.poll() {
            self.apply_export(result);
            changed = true;
        }
        changed
    }

    /// Hands over a finished export, once.
    pub fn take_download(&mut self) -> Option<CsvExport> {
        self.download.take()
    }

    fn apply_page(&mut self, result: ApiResult<FetchedPage>) {
        match result {
            Ok(fetched) => {
                info!(
                    "Fetched {} rows of {}",
                    fetched.page.users.len(),
                    fetched.page.total
                );
                self.rows = fetched.page.users;
                self.total_count = fetched.page.total;
                self.fetch_error = None;
                self.status = FetchStatus::Loaded;
                self.config.notify_data_fetched(&fetched.raw);
            }
            Err(err) => {
                error!("Error fetching data: {err}");
                self.rows.clear();
                self.total_count = 0;
                self.fetch_error = Some(FETCH_FAILED_MESSAGE);
                self.status = FetchStatus::Errored;
            }
        }
    }

    fn apply_export(&mut self, result: ApiResult<PendingExport>) {
        match result {
            Ok(PendingExport { file_name, rows }) => {
                let contents = build_csv(self.config.columns(), &rows);
                info!("Export {file_name} ready with {} rows", rows.len());
                self.export_error = None;
                self.download = Some(CsvExport {
                    file_name,
                    contents,
                    row_count: rows.len(),
                });
            }
            Err(err) => {
                error!("Error exporting data: {err}");
                self.export_error = Some(EXPORT_FAILED_MESSAGE);
            }
        }
    }
}
