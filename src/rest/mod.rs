//! Resource accessors: one service per remote resource type, sharing a
//! pagination cursor for the listing endpoints.

mod accounts;
mod contacts;
mod groups;
mod messages;
mod pagination;
mod sendernames;

pub use accounts::Accounts;
pub use contacts::Contacts;
pub use groups::Groups;
pub use messages::Messages;
pub use sendernames::SenderNames;
