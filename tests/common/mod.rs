//! Shared collaborator doubles for the flow suites.

#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

use split_core::api::{ApiResult, RequestError, SplitApi};
use split_core::domain::{
    Account, EntityId, Group, GroupPayload, InvitePayload, InviteToken, Transaction,
    TransactionPayload,
};
use split_core::notify::Notifier;
use split_core::screen::{DismissReason, ScreenHost};

/// Scripted backend: either fails every call with a fixed message, or
/// echoes payloads back as entities under a fixed id. Counts every call.
pub struct MockApi {
    pub assign_id: EntityId,
    pub fail_message: Option<String>,
    calls: Mutex<u32>,
}

impl MockApi {
    pub fn succeeding(assign_id: EntityId) -> Self {
        Self {
            assign_id,
            fail_message: None,
            calls: Mutex::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            assign_id: 0,
            fail_message: Some(message.into()),
            calls: Mutex::new(0),
        }
    }

    pub fn call_count(&self) -> u32 {
        *self.lock()
    }

    fn record(&self) -> ApiResult<()> {
        *self.lock() += 1;
        match &self.fail_message {
            Some(message) => Err(RequestError::new(message.clone())),
            None => Ok(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, u32> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SplitApi for MockApi {
    fn create_group(&self, payload: &GroupPayload) -> ApiResult<Group> {
        self.record()?;
        Ok(Group {
            id: self.assign_id,
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
        self.record()?;
        Ok(Transaction {
            id: self.assign_id,
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
        self.record()?;
        Ok(InviteToken {
            id: self.assign_id,
            group_id,
            token: "sekrit".into(),
            description: payload.description.clone(),
            valid_until: payload.valid_until,
            single_use: payload.single_use,
        })
    }

    fn delete_invite_token(&self, _group_id: EntityId, _token_id: EntityId) -> ApiResult<()> {
        self.record()
    }

    fn list_accounts(&self, _group_id: EntityId) -> ApiResult<Vec<Account>> {
        self.record()?;
        Ok(Vec::new())
    }
}

/// Records toast messages in arrival order.
#[derive(Default)]
pub struct RecordingNotifier {
    events: Mutex<Vec<(bool, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn successes(&self) -> Vec<String> {
        self.filtered(true)
    }

    pub fn errors(&self) -> Vec<String> {
        self.filtered(false)
    }

    fn filtered(&self, success: bool) -> Vec<String> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(kind, _)| *kind == success)
            .map(|(_, message)| message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((true, message.to_string()));
    }

    fn notify_error(&self, message: &str) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((false, message.to_string()));
    }
}

/// Records dismissal reasons.
#[derive(Default)]
pub struct RecordingHost {
    pub reasons: Vec<DismissReason>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScreenHost for RecordingHost {
    fn dismiss(&mut self, reason: DismissReason) {
        self.reasons.push(reason);
    }
}

pub fn sample_group(id: EntityId) -> Group {
    Group {
        id,
        name: "Trip".into(),
        description: String::new(),
        currency_symbol: "€".into(),
        terms: String::new(),
        add_user_account_on_join: false,
    }
}

pub fn sample_account(id: EntityId, group_id: EntityId, name: &str) -> Account {
    Account {
        id,
        group_id,
        name: name.into(),
    }
}

pub fn day(year: i32, month: u32, dayofmonth: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, dayofmonth).unwrap()
}
