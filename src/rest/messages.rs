use std::sync::Arc;

use crate::client::{ApiResponse, ClientCore, NimbaError};
use crate::domain::PageQuery;
use crate::rest::pagination::Paginator;
use crate::transport::{HttpMethod, encode_create_message_form};

/// Message service: send, retrieve, and paginate through sent messages.
pub struct Messages {
    core: Arc<ClientCore>,
    pager: Paginator,
}

impl Messages {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        let list_url = format!("{}/v1/messages", core.base_url());
        Self {
            core,
            pager: Paginator::new(list_url),
        }
    }

    /// List the first page of messages with the default page size.
    pub fn list(&mut self) -> Result<ApiResponse, NimbaError> {
        self.list_page(PageQuery::DEFAULT_LIMIT, 0)
    }

    /// List messages with explicit `limit`/`offset`.
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

    /// Total number of messages reported by the last successful listing.
    pub fn count(&self) -> u64 {
        self.pager.count()
    }

    /// Send a message to one or more recipients (`POST /v1/messages`).
    ///
    /// `sender_name` is case sensitive and must be approved for the account.
    pub fn create(
        &self,
        to: &[impl AsRef<str>],
        sender_name: &str,
        message: &str,
    ) -> Result<ApiResponse, NimbaError> {
        let url = format!("{}/v1/messages", self.core.base_url());
        let form = encode_create_message_form(to, sender_name, message);
        self.core.request(
            HttpMethod::Post,
            &url,
            Vec::new(),
            form,
            Vec::new(),
            None,
            None,
        )
    }

    /// Retrieve one message by id (`GET /v1/messages/{id}`).
    pub fn retrieve(&self, message_id: &str) -> Result<ApiResponse, NimbaError> {
        let url = format!("{}/v1/messages/{message_id}", self.core.base_url());
        self.core.request(
            HttpMethod::Get,
            &url,
            Vec::new(),
            Vec::new(),
            Vec::new(),
            None,
            None,
        )
    }
}
