use std::sync::Arc;

use crate::client::{ApiResponse, ClientCore, NimbaError};
use crate::domain::PageQuery;
use crate::rest::pagination::Paginator;
use crate::transport::{HttpMethod, encode_create_contact_form};

/// Contact service: create contacts and paginate through the address book.
pub struct Contacts {
    core: Arc<ClientCore>,
    pager: Paginator,
}

impl Contacts {
    pub(crate) fn new(core: Arc<ClientCore>) -> Self {
        let list_url = format!("{}/v1/contacts", core.base_url());
        Self {
            core,
            pager: Paginator::new(list_url),
        }
    }

    /// List the first page of contacts with the default page size.
    pub fn list(&mut self) -> Result<ApiResponse, NimbaError> {
        self.list_page(PageQuery::DEFAULT_LIMIT, 0)
    }

    /// List contacts with explicit `limit`/`offset`.
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

    /// Total number of contacts reported by the last successful listing.
    pub fn count(&self) -> u64 {
        self.pager.count()
    }

    /// Create a contact (`POST /v1/contacts`). `name` and `groups` are sent
    /// only when non-empty.
    pub fn create(
        &self,
        numero: &str,
        name: Option<&str>,
        groups: &[impl AsRef<str>],
    ) -> Result<ApiResponse, NimbaError> {
        let url = format!("{}/v1/contacts", self.core.base_url());
        let form = encode_create_contact_form(numero, name, groups);
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
}

#[cfg(test)]
mod tests {
    use crate::testing::{FakeTransport, fake_client};
    use crate::transport::HttpMethod;

    use super::*;

    #[test]
    fn list_targets_the_contact_endpoint() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_response(200, "{\"next\":null,\"previous\":null,\"count\":0}");
        let mut client = fake_client(&transport);

        client.contacts().list().unwrap();
        assert_eq!(
            transport.last_request().unwrap().url,
            "https://api.test/v1/contacts"
        );
    }

    #[test]
    fn create_sends_only_the_number_when_optionals_are_absent() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_response(201, "{\"numero\":\"624000001\"}");
        let mut client = fake_client(&transport);

        client
            .contacts()
            .create("624000001", None, &[] as &[&str])
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://api.test/v1/contacts");
        assert_eq!(
            request.form,
            vec![("numero".to_owned(), "624000001".to_owned())]
        );
    }

    #[test]
    fn create_includes_name_and_groups_when_present() {
        let transport = Arc::new(FakeTransport::new());
        transport.push_response(201, "{\"numero\":\"624000001\"}");
        let mut client = fake_client(&transport);

        client
            .contacts()
            .create("624000001", Some("Ada"), &["vip", "staff"])
            .unwrap();

        let request = transport.last_request().unwrap();
        assert!(
            request
                .form
                .contains(&("name".to_owned(), "Ada".to_owned()))
        );
        let groups = request
            .form
            .iter()
            .filter(|(key, _)| key == "groups")
            .map(|(_, value)| value.as_str())
            .collect::<Vec<_>>();
        assert_eq!(groups, vec!["vip", "staff"]);
    }
}
