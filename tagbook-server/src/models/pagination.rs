//! Limit/offset windows for list endpoints

use serde::Deserialize;

/// Row window for a list query.
///
/// Both bounds are optional and passed through as-is: no clamping and no
/// default page size. An absent limit means "all remaining rows".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Pagination {
    pub fn new(limit: Option<u64>, offset: Option<u64>) -> Self {
        Self { limit, offset }
    }

    /// Whether the query needs no LIMIT/OFFSET clause at all.
    pub fn is_unbounded(&self) -> bool {
        self.limit.is_none() && self.offset.is_none()
    }
}

/// Query parameters for list endpoints (`?limit=&offset=`)
///
/// Non-numeric values fail deserialization and surface as 400.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl From<PaginationParams> for Pagination {
    fn from(params: PaginationParams) -> Self {
        Self::new(params.limit, params.offset)
    }
}
