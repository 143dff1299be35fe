//! Test support: a recording transport and a client wired to it.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::client::Client;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, TransportError};

/// In-memory [`HttpTransport`] that records every request and replays queued
/// responses. Falls back to `200 {}` when the queue is empty.
pub(crate) struct FakeTransport {
    state: Mutex<FakeTransportState>,
}

#[derive(Default)]
struct FakeTransportState {
    requests: Vec<HttpRequest>,
    responses: VecDeque<HttpResponse>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(FakeTransportState::default()),
        }
    }

    pub(crate) fn push_response(&self, status: u16, body: &str) {
        self.state
            .lock()
            .unwrap()
            .responses
            .push_back(HttpResponse {
                status,
                body: body.to_owned(),
                headers: vec![("content-type".to_owned(), "application/json".to_owned())],
            });
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.state.lock().unwrap().requests.last().cloned()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }
}

impl HttpTransport for FakeTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        Ok(state.responses.pop_front().unwrap_or(HttpResponse {
            status: 200,
            body: "{}".to_owned(),
            headers: Vec::new(),
        }))
    }
}

/// Client pointed at a fake base URL and backed by the given transport.
pub(crate) fn fake_client(transport: &Arc<FakeTransport>) -> Client {
    Client::builder("SID123", "token456")
        .base_url("https://api.test")
        .transport(Arc::clone(transport) as Arc<dyn HttpTransport>)
        .build()
        .unwrap()
}
