use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
/// Pagination fields carried by every listing response.
///
/// `next` and `previous` are fully qualified URLs or null; `count` is the
/// total number of items across all pages. Missing fields are tolerated.
pub struct PageEnvelope {
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub count: u64,
}

/// Decode the pagination envelope from a listing response body.
pub fn decode_page_envelope(body: &str) -> Result<PageEnvelope, serde_json::Error> {
    serde_json::from_str(body)
}
