//! The "add group" screen flow.

use std::sync::Arc;

use crate::api::SplitApi;
use crate::domain::{EntityId, Group};
use crate::forms::{group, FormState};
use crate::notify::Notifier;
use crate::screen::{DismissReason, ScreenHost};
use crate::store::ScopedStore;
use crate::submit::{SubmitController, SubmitOptions, SubmitOutcome};

use super::FlowResult;

/// Validate, create the group remotely, reconcile the signed-in user's
/// group list, and dismiss on success.
pub struct GroupCreateFlow {
    form: FormState,
    controller: SubmitController,
    user_scope: EntityId,
    groups: Arc<ScopedStore<Group>>,
}

impl GroupCreateFlow {
    pub fn new(user_scope: EntityId, groups: Arc<ScopedStore<Group>>) -> Self {
        Self {
            form: group::new_form(),
            controller: SubmitController::new(),
            user_scope,
            groups,
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
        let payload = group::commit(&self.form);
        match api.create_group(&payload) {
            Ok(created) => {
                self.groups.reconcile_insert(self.user_scope, created);
                self.controller.finish_success(token, &mut self.form);
                host.dismiss(DismissReason::Completed);
                FlowResult::Completed
            }
            Err(err) => {
                self.controller.finish_failure(token, &mut self.form);
                tracing::warn!(error = %err, "group creation failed");
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
