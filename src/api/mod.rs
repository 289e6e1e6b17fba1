//! Remote mutation client boundary.

use thiserror::Error;

use crate::domain::{
    Account, EntityId, Group, GroupPayload, InvitePayload, InviteToken, Transaction,
    TransactionPayload,
};

pub mod memory;

pub use memory::InMemoryApi;

/// Opaque remote failure; only the human-readable message is surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RequestError {
    pub message: String,
}

impl RequestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub type ApiResult<T> = Result<T, RequestError>;

/// Operations the backend exposes to the client screens.
///
/// Implementations own transport, serialization, and timeouts; the flows
/// only consume the created entities or the failure message.
pub trait SplitApi {
    fn create_group(&self, payload: &GroupPayload) -> ApiResult<Group>;

    fn create_transaction(
        &self,
        group_id: EntityId,
        payload: &TransactionPayload,
    ) -> ApiResult<Transaction>;

    fn create_invite_token(
        &self,
        group_id: EntityId,
        payload: &InvitePayload,
    ) -> ApiResult<InviteToken>;

    fn delete_invite_token(&self, group_id: EntityId, token_id: EntityId) -> ApiResult<()>;

    fn list_accounts(&self, group_id: EntityId) -> ApiResult<Vec<Account>>;
}
