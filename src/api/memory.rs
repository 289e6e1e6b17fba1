//! In-memory backend used by the demo binary and exploratory tests.

use std::sync::{Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::domain::{
    Account, EntityId, Group, GroupPayload, InvitePayload, InviteToken, Transaction,
    TransactionPayload,
};

use super::{ApiResult, RequestError, SplitApi};

/// A fake backend that assigns ids sequentially and keeps everything in
/// process memory. `fail_with` flips it into a failure mode for exercising
/// the error paths.
pub struct InMemoryApi {
    inner: Mutex<MemoryState>,
}

struct MemoryState {
    next_id: EntityId,
    accounts: Vec<Account>,
    fail_message: Option<String>,
}

impl Default for InMemoryApi {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MemoryState {
                next_id: 1,
                accounts: Vec::new(),
                fail_message: None,
            }),
        }
    }

    /// Registers a member account so it can be listed and selected.
    pub fn seed_account(&self, group_id: EntityId, name: impl Into<String>) -> Account {
        let mut inner = self.lock();
        let account = Account {
            id: allocate(&mut inner),
            group_id,
            name: name.into(),
        };
        inner.accounts.push(account.clone());
        account
    }

    /// Makes every subsequent call fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.lock().fail_message = Some(message.into());
    }

    /// Clears a previously configured failure mode.
    pub fn recover(&self) {
        self.lock().fail_message = None;
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn guard(&self) -> Result<MutexGuard<'_, MemoryState>, RequestError> {
        let inner = self.lock();
        if let Some(message) = inner.fail_message.clone() {
            return Err(RequestError::new(message));
        }
        Ok(inner)
    }
}

fn allocate(inner: &mut MemoryState) -> EntityId {
    let id = inner.next_id;
    inner.next_id += 1;
    id
}

impl SplitApi for InMemoryApi {
    fn create_group(&self, payload: &GroupPayload) -> ApiResult<Group> {
        let mut inner = self.guard()?;
        Ok(Group {
            id: allocate(&mut inner),
            name: payload.name.clone(),
            description: payload.description.clone(),
            currency_symbol: payload.currency_symbol.clone(),
            terms: payload.terms.clone(),
            add_user_account_on_join: payload.add_user_account_on_join,
        })
    }

    fn create_transaction(
        &self,
        group_id: EntityId,
        payload: &TransactionPayload,
    ) -> ApiResult<Transaction> {
        let mut inner = self.guard()?;
        Ok(Transaction {
            id: allocate(&mut inner),
            group_id,
            kind: payload.kind,
            description: payload.description.clone(),
            value: payload.value,
            billed_at: payload.billed_at,
            currency_symbol: payload.currency_symbol.clone(),
            currency_conversion_rate: payload.currency_conversion_rate,
            creditor_shares: payload.creditor_shares.clone(),
            debitor_shares: payload.debitor_shares.clone(),
        })
    }

    fn create_invite_token(
        &self,
        group_id: EntityId,
        payload: &InvitePayload,
    ) -> ApiResult<InviteToken> {
        let mut inner = self.guard()?;
        Ok(InviteToken {
            id: allocate(&mut inner),
            group_id,
            token: Uuid::new_v4().simple().to_string(),
            description: payload.description.clone(),
            valid_until: payload.valid_until,
            single_use: payload.single_use,
        })
    }

    fn delete_invite_token(&self, _group_id: EntityId, _token_id: EntityId) -> ApiResult<()> {
        self.guard()?;
        Ok(())
    }

    fn list_accounts(&self, group_id: EntityId) -> ApiResult<Vec<Account>> {
        let inner = self.guard()?;
        Ok(inner
            .accounts
            .iter()
            .filter(|account| account.group_id == group_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_server_assigned() {
        let api = InMemoryApi::new();
        let payload = GroupPayload {
            name: "Trip".into(),
            description: String::new(),
            currency_symbol: "€".into(),
            terms: String::new(),
            add_user_account_on_join: false,
        };
        let first = api.create_group(&payload).unwrap();
        let second = api.create_group(&payload).unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn failure_mode_rejects_with_the_message() {
        let api = InMemoryApi::new();
        api.fail_with("insufficient permissions");
        let err = api.delete_invite_token(1, 2).unwrap_err();
        assert_eq!(err.message, "insufficient permissions");
        api.recover();
        assert!(api.delete_invite_token(1, 2).is_ok());
    }
}
