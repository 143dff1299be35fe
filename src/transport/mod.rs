//! Transport layer: blocking HTTP dispatch and wire-format helpers.

mod form;
mod http;
mod page;

pub use form::{encode_create_contact_form, encode_create_message_form, encode_list_query};
pub use http::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, NimbaHttpClient, NimbaHttpClientBuilder,
    TransportError,
};
pub use page::{PageEnvelope, decode_page_envelope};
