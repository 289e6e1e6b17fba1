//! Per-screen submission flows.
//!
//! Each flow glues one form schema, one submission controller, and the
//! shared stores to the collaborator traits: the remote client, the
//! notification surface, and the host screen. Remote failures never leave a
//! flow; they become a notification and the form stays editable.

use crate::api::RequestError;
use crate::forms::ValidationReport;

pub mod group_create;
pub mod invite_create;
pub mod invite_delete;
pub mod purchase_create;
pub mod transfer_create;

pub use group_create::GroupCreateFlow;
pub use invite_create::InviteCreateFlow;
pub use invite_delete::InviteDeleteFlow;
pub use purchase_create::PurchaseCreateFlow;
pub use transfer_create::TransferCreateFlow;

/// What a submit attempt produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowResult {
    /// Entity created and reconciled; the screen was dismissed.
    Completed,
    /// Validation failed; all errors are now visible on the form.
    Invalid(ValidationReport),
    /// The remote call failed; the message was surfaced as a notification
    /// and the form stays editable for a retry.
    Failed(RequestError),
    /// A submission is already in flight; nothing happened.
    Busy,
}
