//! The "create purchase" modal flow.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::SplitApi;
use crate::domain::{Group, Transaction};
use crate::forms::{purchase, FormState};
use crate::notify::Notifier;
use crate::screen::{DismissReason, ScreenHost};
use crate::store::ScopedStore;
use crate::submit::{SubmitController, SubmitOptions, SubmitOutcome};

use super::FlowResult;

/// Validate, create the purchase remotely, and reconcile the group's
/// transaction list.
pub struct PurchaseCreateFlow {
    form: FormState,
    controller: SubmitController,
    group: Group,
    transactions: Arc<ScopedStore<Transaction>>,
}

impl PurchaseCreateFlow {
    pub fn new(group: Group, today: NaiveDate, transactions: Arc<ScopedStore<Transaction>>) -> Self {
        Self {
            form: purchase::new_form(today),
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
        let payload = purchase::commit(&self.form, &self.group);
        match api.create_transaction(self.group.id, &payload) {
            Ok(created) => {
                self.transactions.reconcile_insert(self.group.id, created);
                self.controller.finish_success(token, &mut self.form);
                host.dismiss(DismissReason::Completed);
                FlowResult::Completed
            }
            Err(err) => {
                self.controller.finish_failure(token, &mut self.form);
                tracing::warn!(error = %err, "purchase creation failed");
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
