use std::sync::Arc;

use crate::client::{ApiResponse, ClientCore, NimbaError};
use crate::domain::PageQuery;
use crate::rest::pagination::Paginator;

/// Sender name service: read-only listing of approved sender names.
pub struct SenderNames {
    core: Arc<ClientCore>,
    pager: Paginator,
}

impl SenderNames {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        let list_url = format!("{}/v1/sendernames", core.base_url());
        Self {
            core,
            pager: Paginator::new(list_url),
        }
    }

    /// List the first page of sender names with the default page size.
    pub fn list(&mut self) -> Result<ApiResponse, NimbaError> {
        self.list_page(PageQuery::DEFAULT_LIMIT, 0)
    }

    /// List sender names with explicit `limit`/`offset`.
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

    /// Total number of sender names reported by the last successful listing.
    pub fn count(&self) -> u64 {
        self.pager.count()
    }
}
