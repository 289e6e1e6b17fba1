//! Delete-confirmation flow for invite links. No form is involved; the
//! remote call resolves first and only then is the token removed from the
//! scoped collection.

use std::sync::Arc;

use crate::api::{RequestError, SplitApi};
use crate::domain::{EntityId, InviteToken};
use crate::notify::Notifier;
use crate::store::ScopedStore;

pub struct InviteDeleteFlow {
    invites: Arc<ScopedStore<InviteToken>>,
}

impl InviteDeleteFlow {
    pub fn new(invites: Arc<ScopedStore<InviteToken>>) -> Self {
        Self { invites }
    }

    pub fn delete(
        &self,
        api: &dyn SplitApi,
        notifier: &dyn Notifier,
        group_id: EntityId,
        token_id: EntityId,
    ) -> Result<(), RequestError> {
        match api.delete_invite_token(group_id, token_id) {
            Ok(()) => {
                self.invites.reconcile_remove(group_id, token_id);
                notifier.notify_success("Removed invite link");
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "invite deletion failed");
                notifier.notify_error(&err.to_string());
                Err(err)
            }
        }
    }
}
