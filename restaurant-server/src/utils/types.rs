//! Shared Types

use serde::Deserialize;

/// Pagination query parameters for the user listing
///
/// `startIndex` wins over `page` when both are given.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationParams {
    pub record_per_page: Option<i64>,
    pub page: Option<i64>,
    pub start_index: Option<i64>,
}

impl PaginationParams {
    const DEFAULT_PAGE_SIZE: i64 = 10;
    /// SurrealDB takes `LIMIT` and `START` as u32
    const MAX_BOUND: i64 = u32::MAX as i64;

    /// Page size, at least 1
    pub fn limit(&self) -> i64 {
        match self.record_per_page {
            Some(n) if n >= 1 => n.min(Self::MAX_BOUND),
            _ => Self::DEFAULT_PAGE_SIZE,
        }
    }

    /// Page number, at least 1
    pub fn page(&self) -> i64 {
        match self.page {
            Some(p) if p >= 1 => p,
            _ => 1,
        }
    }

    /// Offset of the first record, capped at the largest offset the store accepts
    pub fn offset(&self) -> i64 {
        let offset = match self.start_index {
            Some(start) if start >= 0 => start,
            _ => (self.page() - 1).saturating_mul(self.limit()),
        };
        offset.min(Self::MAX_BOUND)
    }
}
