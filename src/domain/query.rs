//! Transient list-screen state consumed by [`crate::pipeline::run`].

use serde::Serialize;

/// Page size used when none (or zero) is configured.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Time-bounded filter applied after the text search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum ExpiryFilter {
    #[default]
    All,
    Within7Days,
    Within30Days,
    ExpiredOnly,
}

impl ExpiryFilter {
    pub const ALL: [ExpiryFilter; 4] = [
        ExpiryFilter::All,
        ExpiryFilter::Within7Days,
        ExpiryFilter::Within30Days,
        ExpiryFilter::ExpiredOnly,
    ];

    /// Parses a query-string token; unknown tokens fall back to `All`.
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "7days" => ExpiryFilter::Within7Days,
            "30days" => ExpiryFilter::Within30Days,
            "expired" => ExpiryFilter::ExpiredOnly,
            _ => ExpiryFilter::All,
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            ExpiryFilter::All => "all",
            ExpiryFilter::Within7Days => "7days",
            ExpiryFilter::Within30Days => "30days",
            ExpiryFilter::ExpiredOnly => "expired",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExpiryFilter::All => "All",
            ExpiryFilter::Within7Days => "Expiring in 7 days",
            ExpiryFilter::Within30Days => "Expiring in 30 days",
            ExpiryFilter::ExpiredOnly => "Expired",
        }
    }
}

/// Ordering applied after filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SortKey {
    #[default]
    None,
    NameAsc,
    NameDesc,
    EndDateAsc,
    EndDateDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::EndDateAsc,
        SortKey::EndDateDesc,
    ];

    /// Parses a query-string token; unknown tokens fall back to `None`.
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "name_asc" => SortKey::NameAsc,
            "name_desc" => SortKey::NameDesc,
            "end_asc" => SortKey::EndDateAsc,
            "end_desc" => SortKey::EndDateDesc,
            _ => SortKey::None,
        }
    }

    pub fn as_token(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
            SortKey::EndDateAsc => "end_asc",
            SortKey::EndDateDesc => "end_desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::None => "Default order",
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::EndDateAsc => "AMC end (soonest first)",
            SortKey::EndDateDesc => "AMC end (latest first)",
        }
    }
}

/// Immutable snapshot of the list-screen controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryState {
    pub search_text: String,
    pub expiry_filter: ExpiryFilter,
    pub sort_key: SortKey,
    /// 1-based; `0` is read as `1`.
    pub page_number: usize,
    /// `0` is read as [`DEFAULT_PAGE_SIZE`].
    pub page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            expiry_filter: ExpiryFilter::All,
            sort_key: SortKey::None,
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn filter(mut self, filter: ExpiryFilter) -> Self {
        self.expiry_filter = filter;
        self
    }

    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    pub fn page(mut self, page_number: usize) -> Self {
        self.page_number = page_number;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub(crate) fn effective_page_size(&self) -> usize {
        if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        }
    }
}
