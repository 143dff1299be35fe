use crate::client::{ApiResponse, ClientCore, NimbaError};
use crate::domain::PageQuery;
use crate::transport::{HttpMethod, decode_page_envelope, encode_list_query};

/// Pagination cursor shared by every listing accessor.
///
/// The cursor is replaced only after a successful page fetch; a failed call
/// (non-OK status or transport error) leaves the previous cursor in place, so
/// the caller can retry `next()`/`previous()` against the same URLs.
#[derive(Debug, Clone)]
pub(crate) struct Paginator {
    list_url: String,
    next: Option<String>,
    previous: Option<String>,
    count: u64,
}

impl Paginator {
    pub(crate) fn new(list_url: String) -> Self {
        Self {
            list_url,
            next: None,
            previous: None,
            count: 0,
        }
    }

    /// Total number of items reported by the last successful page fetch.
    pub(crate) fn count(&self) -> u64 {
        self.count
    }

    /// Fetch a page with validated `limit`/`offset` parameters.
    pub(crate) fn list(
        &mut self,
        core: &ClientCore,
        limit: i64,
        offset: i64,
    ) -> Result<ApiResponse, NimbaError> {
        let page = PageQuery::new(limit, offset).map_err(NimbaError::InvalidArgument)?;
        let url = self.list_url.clone();
        self.request_page(core, &url, encode_list_query(&page))
    }

    /// Follow the `next` cursor; `Ok(None)` without any network call when it
    /// is unset.
    pub(crate) fn next(&mut self, core: &ClientCore) -> Result<Option<ApiResponse>, NimbaError> {
        match self.next.clone() {
            None => Ok(None),
            Some(url) => self.request_page(core, &url, Vec::new()).map(Some),
        }
    }

    /// Follow the `previous` cursor; `Ok(None)` without any network call when
    /// it is unset.
    pub(crate) fn previous(
        &mut self,
        core: &ClientCore,
    ) -> Result<Option<ApiResponse>, NimbaError> {
        match self.previous.clone() {
            None => Ok(None),
            Some(url) => self.request_page(core, &url, Vec::new()).map(Some),
        }
    }

    fn request_page(
        &mut self,
        core: &ClientCore,
        uri: &str,
        params: Vec<(String, String)>,
    ) -> Result<ApiResponse, NimbaError> {
        let response = core.request(
            HttpMethod::Get,
            uri,
            params,
            Vec::new(),
            Vec::new(),
            None,
            None,
        )?;
        if response.ok() {
            let envelope = decode_page_envelope(response.text()).map_err(NimbaError::Parse)?;
            self.next = envelope.next;
            self.previous = envelope.previous;
            self.count = envelope.count;
        }
        Ok(response)
    }
}
