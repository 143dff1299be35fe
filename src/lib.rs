//! Rust client for the Nimba SMS REST API.
//!
//! The crate is a thin blocking wrapper over the HTTP API: a `domain` layer
//! of validated values, a `transport` layer for HTTP dispatch, a `client`
//! layer that injects credentials and standard headers, and a `rest` layer of
//! per-resource accessors with a shared pagination cursor.
//!
//! Remote API failures are not `Err`: any HTTP response, successful or not,
//! comes back as an [`ApiResponse`] and the caller branches on
//! [`ApiResponse::ok`]. Only configuration mistakes, invalid arguments,
//! transport failures, and non-JSON bodies produce a [`NimbaError`].
//!
//! ```rust,no_run
//! use nimbasms::Client;
//!
//! fn main() -> Result<(), nimbasms::NimbaError> {
//!     let mut client = Client::new("ACCOUNT_SID", "ACCESS_TOKEN")?;
//!
//!     let account = client.accounts().get()?;
//!     if account.ok() {
//!         println!("balance: {}", account.data()?["balance"]);
//!     }
//!
//!     let page = client.messages().list()?;
//!     if page.ok() {
//!         println!("{} messages", client.messages().count());
//!     }
//!     while let Some(page) = client.messages().next()? {
//!         println!("{page}");
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod rest;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{ApiResponse, Client, ClientBuilder, DEFAULT_BASE_URL, NimbaError};
pub use domain::{AccessToken, AccountSid, Credentials, PageQuery, ValidationError};
pub use rest::{Accounts, Contacts, Groups, Messages, SenderNames};
pub use transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, NimbaHttpClient, NimbaHttpClientBuilder,
    TransportError,
};
