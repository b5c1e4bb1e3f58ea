//! Page arithmetic for list endpoints

use serde::{Deserialize, Serialize};

/// Pagination defaults
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when the caller gives none (default: 10)
    #[serde(default = "default_limit")]
    pub default_limit: u32,
    /// Largest page size a caller may ask for (default: 100)
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
}

fn default_limit() -> u32 {
    10
}

fn default_max_limit() -> u32 {
    100
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl PaginationConfig {
    /// Create a new PaginationConfig from environment variables
    ///
    /// # Environment Variables
    /// - `PAGINATION_DEFAULT_LIMIT`: Page size when none is requested (default: 10)
    /// - `PAGINATION_MAX_LIMIT`: Upper bound on the page size (default: 100)
    pub fn from_env() -> Result<Self, config::ConfigError> {
        crate::config::load("PAGINATION")
    }
}

/// Query parameters accepted by list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// Page number (1-based)
    pub page: Option<u32>,
    /// Number of items per page
    pub limit: Option<u32>,
    /// Case-insensitive substring filter
    pub search: Option<String>,
}

/// A page request with defaults and bounds applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
    pub search: Option<String>,
}

impl PageRequest {
    pub fn resolve(query: &PageQuery, config: &PaginationConfig) -> Self {
        let page = query.page.unwrap_or(1).max(1);
        let limit = query
            .limit
            .unwrap_or(config.default_limit)
            .clamp(1, config.max_limit.max(1));
        let search = query
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            page,
            limit,
            search,
        }
    }

    pub fn offset(&self) -> i64 {
        (self.page as i64 - 1) * self.limit as i64
    }
}

/// Page metadata returned next to a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub pages: i64,
}

impl Pagination {
    pub fn new(total: i64, page: u32, limit: u32) -> Self {
        let limit_i64 = limit.max(1) as i64;
        let pages = (total.max(0) + limit_i64 - 1) / limit_i64;

        Self {
            total,
            page,
            limit,
            pages,
        }
    }
}

/// Build an `ILIKE` pattern matching `search` literally anywhere in the value
pub fn like_pattern(search: &str) -> String {
    let mut escaped = String::with_capacity(search.len() + 2);
    escaped.push('%');
    for c in search.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
