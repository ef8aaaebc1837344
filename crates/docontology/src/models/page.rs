//! Paginated list envelope.

use serde::{Deserialize, Serialize};

/// Pagination counters reported by the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub limit: u64,
    pub offset: u64,
    #[serde(default)]
    pub has_more: bool,
}

/// One page of a list result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}

impl<T> Page<T> {
    /// True when items exist past this page (`offset + len(data) < total`).
    pub fn has_more(&self) -> bool {
        self.pagination.offset + (self.data.len() as u64) < self.pagination.total
    }

    /// Total number of items across all pages.
    pub fn total(&self) -> u64 {
        self.pagination.total
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
