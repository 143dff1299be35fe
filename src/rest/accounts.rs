use std::sync::Arc;

use crate::client::{ApiResponse, ClientCore, NimbaError};
use crate::transport::HttpMethod;

/// Account service: a single resource carrying the balance and webhook
/// configuration, no pagination.
pub struct Accounts {
    core: Arc<ClientCore>,
}

impl Accounts {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        Self { core }
    }

    /// Retrieve the account information (`GET /v1/accounts`).
    pub fn get(&self) -> Result<ApiResponse, NimbaError> {
        let url = format!("{}/v1/accounts", self.core.base_url());
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

#[cfg(test)]
mod tests {
    use crate::testing::{FakeTransport, fake_client};
    use crate::transport::HttpMethod;

    use super::*;

    #[test]
    fn get_requests_the_account_endpoint() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_response(200, "{\"sid\":\"SID123\",\"balance\":2000}");
        let mut client = fake_client(&transport);

        let response = client.accounts().get().unwrap();
        assert!(response.ok());
        assert_eq!(response.data().unwrap()["balance"], 2000);

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://api.test/v1/accounts");
        assert!(request.params.is_empty());
        assert!(request.form.is_empty());
    }
}
