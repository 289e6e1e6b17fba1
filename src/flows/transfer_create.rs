//! The "create transfer" modal flow.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::SplitApi;
use crate::domain::{Account, Group, Transaction};
use crate::forms::{transfer, FormState};
use crate::notify::Notifier;
use crate::screen::{DismissReason, ScreenHost};
use crate::store::ScopedStore;
use crate::submit::{SubmitController, SubmitOptions, SubmitOutcome};

use super::FlowResult;

/// Validate, create the transfer remotely, and reconcile the group's
/// transaction list. Creditor and debitor selections fill single-entry
/// share maps with weight 1.0.
pub struct TransferCreateFlow {
    form: FormState,
    controller: SubmitController,
    group: Group,
    transactions: Arc<ScopedStore<Transaction>>,
}

impl TransferCreateFlow {
    pub fn new(group: Group, today: NaiveDate, transactions: Arc<ScopedStore<Transaction>>) -> Self {
        Self {
            form: transfer::new_form(today),
            controller: SubmitController::new(),
            group,
            transactions,
        }
    }

    pub fn with_options(mut self, options: SubmitOptions) -> Self {
        self.controller = SubmitController::with_options(options);
        self
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    /// Selecting from a picker both sets the value and counts as
    /// interaction, so a later error on the field is visible.
    pub fn select_creditor(&mut self, account: &Account) {
        self.form.set_value(transfer::CREDITOR, account.id.to_string());
        self.form.blur(transfer::CREDITOR);
    }

    pub fn select_debitor(&mut self, account: &Account) {
        self.form.set_value(transfer::DEBITOR, account.id.to_string());
        self.form.blur(transfer::DEBITOR);
    }

    pub fn submit(
        &mut self,
        api: &dyn SplitApi,
        notifier: &dyn Notifier,
        host: &mut dyn ScreenHost,
    ) -> FlowResult {
        let token = match self.controller.begin(&mut self.form) {
            SubmitOutcome::Started(token) => token,
            SubmitOutcome::Rejected(report) => return FlowResult::Invalid(report),
            SubmitOutcome::AlreadySubmitting => return FlowResult::Busy,
        };
        let payload = transfer::commit(&self.form, &self.group);
        match api.create_transaction(self.group.id, &payload) {
            Ok(created) => {
                self.transactions.reconcile_insert(self.group.id, created);
                self.controller.finish_success(token, &mut self.form);
                host.dismiss(DismissReason::Completed);
                FlowResult::Completed
            }
            Err(err) => {
                self.controller.finish_failure(token, &mut self.form);
                tracing::warn!(error = %err, "transfer creation failed");
                notifier.notify_error(&err.to_string());
                FlowResult::Failed(err)
            }
        }
    }

    /// User-initiated cancel; refused while a submission is in flight.
    pub fn cancel(&mut self, host: &mut dyn ScreenHost) -> bool {
        if self.form.submitting() {
            return false;
        }
        self.form.reset();
        self.controller.reset();
        host.dismiss(DismissReason::Cancelled);
        true
    }
}
