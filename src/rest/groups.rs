use std::sync::Arc;

use crate::client::{ApiResponse, ClientCore, NimbaError};
use crate::domain::PageQuery;
use crate::rest::pagination::Paginator;

/// Group service: read-only listing of contact groups.
pub struct Groups {
    core: Arc<ClientCore>,
    pager: Paginator,
}

impl Groups {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        let list_url = format!("{}/v1/groups", core.base_url());
        Self {
            core,
            pager: Paginator::new(list_url),
        }
    }

    /// List the first page of groups with the default page size.
    pub fn list(&mut self) -> Result<ApiResponse, NimbaError> {
        self.list_page(PageQuery::DEFAULT_LIMIT, 0)
    }

    /// List groups with explicit `limit`/`offset`.
    pub fn list_page(&mut self, limit: i64, offset: i64) -> Result<ApiResponse, NimbaError> {
        self.pager.list(&self.core, limit, offset)
    }

    /// Follow the pagination cursor forward.
    pub fn next(&mut self) -> Result<Option<ApiResponse>, NimbaError> {
        self.pager.next(&self.core)
    }

    /// Follow the pagination cursor backward.
    pub fn previous(&mut self) -> Result<Option<ApiResponse>, NimbaError> {
        self.pager.previous(&self.core)
    }

    /// Total number of groups reported by the last successful listing.
    pub fn count(&self) -> u64 {
        self.pager.count()
    }
}
