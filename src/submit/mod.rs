//! Submission controller: the `Idle → Submitting → {Succeeded, Failed}`
//! state machine shared by every create screen.
//!
//! The duplicate-submit guard is a single-slot token rather than a bare
//! boolean: starting an episode mints a token, and completion handlers must
//! present it. A completion arriving after the screen was dismissed (and the
//! controller reset) carries a stale token and is silently ignored.

use std::time::Duration;

use uuid::Uuid;

use crate::forms::{FormState, ValidationReport};

/// Identifies one submission episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitToken(Uuid);

/// Tuning for a controller instance. `timeout` is advisory: the library
/// never aborts an in-flight call itself; hosts and transports may.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitOptions {
    pub timeout: Option<Duration>,
}

/// Lifecycle phases of one form's submission machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of asking the controller to start a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation passed; the remote call may proceed under this token.
    Started(SubmitToken),
    /// Validation failed. Every field was marked touched; the remote
    /// client must not be called.
    Rejected(ValidationReport),
    /// A submission is already in flight for this form.
    AlreadySubmitting,
}

/// Single-slot submission guard for one [`FormState`] instance.
#[derive(Debug, Default)]
pub struct SubmitController {
    phase: SubmitPhase,
    current: Option<SubmitToken>,
    options: SubmitOptions,
}

impl SubmitController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SubmitOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn options(&self) -> SubmitOptions {
        self.options
    }

    pub fn in_flight(&self) -> bool {
        self.current.is_some()
    }

    /// Validates the form and, when clean, opens a submission episode.
    pub fn begin(&mut self, form: &mut FormState) -> SubmitOutcome {
        if form.submitting() || self.in_flight() {
            return SubmitOutcome::AlreadySubmitting;
        }
        let report = form.validate();
        if !report.is_valid() {
            form.touch_all();
            return SubmitOutcome::Rejected(report);
        }
        let token = SubmitToken(Uuid::new_v4());
        self.current = Some(token);
        self.phase = SubmitPhase::Submitting;
        form.set_submitting(true);
        tracing::debug!(form = form.schema().name, "submission started");
        SubmitOutcome::Started(token)
    }

    /// Applies a successful completion. Returns `false` when the token is
    /// stale and nothing changed.
    pub fn finish_success(&mut self, token: SubmitToken, form: &mut FormState) -> bool {
        if !self.take_current(token) {
            return false;
        }
        self.phase = SubmitPhase::Succeeded;
        form.set_submitting(false);
        true
    }

    /// Applies a failed completion. Returns `false` when the token is stale
    /// and nothing changed.
    pub fn finish_failure(&mut self, token: SubmitToken, form: &mut FormState) -> bool {
        if !self.take_current(token) {
            return false;
        }
        self.phase = SubmitPhase::Failed;
        form.set_submitting(false);
        true
    }

    /// Abandons any in-flight episode; a late completion becomes a no-op.
    pub fn reset(&mut self) {
        self.current = None;
        self.phase = SubmitPhase::Idle;
    }

    fn take_current(&mut self, token: SubmitToken) -> bool {
        if self.current == Some(token) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
