//! Domain layer: validated values and invariants (no I/O).

mod validation;
mod value;

pub use validation::ValidationError;
pub use value::{AccessToken, AccountSid, Credentials, PageQuery};
