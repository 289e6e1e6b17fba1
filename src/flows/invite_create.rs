//! The "create invite link" modal flow.

use std::sync::Arc;

use crate::api::SplitApi;
use crate::domain::{EntityId, InviteToken};
use crate::forms::{invite, FormState};
use crate::notify::Notifier;
use crate::screen::{DismissReason, ScreenHost};
use crate::store::ScopedStore;
use crate::submit::{SubmitController, SubmitOptions, SubmitOutcome};

use super::FlowResult;

/// Validate, create the invite token remotely, and reconcile the group's
/// token list.
pub struct InviteCreateFlow {
    form: FormState,
    controller: SubmitController,
    group_id: EntityId,
    invites: Arc<ScopedStore<InviteToken>>,
}

impl InviteCreateFlow {
    pub fn new(group_id: EntityId, invites: Arc<ScopedStore<InviteToken>>) -> Self {
        Self {
            form: invite::new_form(),
            controller: SubmitController::new(),
            group_id,
            invites,
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
        let payload = invite::commit(&self.form);
        match api.create_invite_token(self.group_id, &payload) {
            Ok(created) => {
                self.invites.reconcile_insert(self.group_id, created);
                self.controller.finish_success(token, &mut self.form);
                notifier.notify_success("Successfully created invite token");
                host.dismiss(DismissReason::Completed);
                FlowResult::Completed
            }
            Err(err) => {
                self.controller.finish_failure(token, &mut self.form);
                tracing::warn!(error = %err, "invite creation failed");
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
