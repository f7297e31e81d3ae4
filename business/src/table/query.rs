use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Everything that determines which rows a table shows.
///
/// Mutators return whether anything changed. Any change other than the page itself moves back
/// to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    page: u32,
    items_per_page: u32,
    sort_field: Option<String>,
    sort_direction: SortDirection,
    search_query: String,
}

impl QueryState {
    pub fn new(
        items_per_page: u32,
        sort_field: Option<String>,
        sort_direction: SortDirection,
    ) -> Self {
        Self {
            page: 1,
            items_per_page: items_per_page.max(1),
            sort_field: sort_field.filter(|field| !field.is_empty()),
            sort_direction,
            search_query: String::new(),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn sort_field(&self) -> Option<&str> {
        self.sort_field.as_deref()
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Row offset of the current page.
    pub fn skip(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.items_per_page)
    }

    /// Same field flips the direction, a new field starts ascending.
    pub fn toggle_sort(&mut self, field: &str) -> bool {
        if self.sort_field.as_deref() == Some(field) {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = Some(field.to_owned());
            self.sort_direction = SortDirection::Asc;
        }
        self.page = 1;
        true
    }

    pub fn set_search_query(&mut self, query: &str) -> bool {
        if self.search_query == query {
            return false;
        }
        self.search_query = query.to_owned();
        self.page = 1;
        true
    }

    pub fn set_items_per_page(&mut self, items_per_page: u32) -> bool {
        if self.items_per_page == items_per_page || items_per_page == 0 {
            return false;
        }
        self.items_per_page = items_per_page;
        self.page = 1;
        true
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    /// Query string for the current page.
    pub fn page_params(&self, searchable: bool) -> Vec<(String, String)> {
        self.params(u64::from(self.items_per_page), self.skip(), searchable)
    }

    /// Query string for an export of `limit` rows from the start, keeping sort and search.
    pub fn export_params(&self, limit: u64, searchable: bool) -> Vec<(String, String)> {
        self.params(limit, 0, searchable)
    }

    fn params(&self, limit: u64, skip: u64, searchable: bool) -> Vec<(String, String)> {
        let mut params = vec![
            ("limit".to_owned(), limit.to_string()),
            ("skip".to_owned(), skip.to_string()),
        ];
        if let Some(field) = &self.sort_field {
            params.push(("sortBy".to_owned(), field.clone()));
            params.push(("order".to_owned(), self.sort_direction.as_str().to_owned()));
        }
        if searchable && !self.search_query.is_empty() {
            params.push(("q".to_owned(), self.search_query.clone()));
        }
        params
    }
}
