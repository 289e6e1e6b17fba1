//! Server-owned records as the client screens see them.
//!
//! Every identifier is assigned by the backend; the client never fabricates
//! one locally, not even optimistically.

pub mod account;
pub mod group;
pub mod invite;
pub mod transaction;

pub use account::Account;
pub use group::{Group, GroupPayload};
pub use invite::{InvitePayload, InviteToken};
pub use transaction::{ShareMap, Transaction, TransactionKind, TransactionPayload};

/// Server-assigned identifier.
pub type EntityId = i64;

/// Anything the scoped store can address by identifier.
pub trait Keyed {
    fn id(&self) -> EntityId;
}
