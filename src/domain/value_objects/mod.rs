use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// One-based page selection. Missing or invalid values fall back to the
/// defaults; the page size is capped at [`MAX_PAGE_SIZE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => u32::try_from(p).unwrap_or(u32::MAX),
            _ => DEFAULT_PAGE,
        };
        let limit = match limit {
            Some(l) if l >= 1 => l.min(i64::from(MAX_PAGE_SIZE)) as u32,
            _ => DEFAULT_PAGE_SIZE,
        };
        Self { page, limit }
    }

    /// Builds a page from raw query strings; anything that is not an
    /// integer falls back to the default like a missing value does.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        let number = |raw: Option<&str>| raw.and_then(|v| v.trim().parse::<i64>().ok());
        Self::new(number(page), number(limit))
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    pub fn total_pages(&self, total: u64) -> u64 {
        total.div_ceil(u64::from(self.limit))
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserQuery {
    pub page: PageRequest,
    /// Case-insensitive substring matched against name or email.
    pub search: Option<String>,
}

impl UserQuery {
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}
