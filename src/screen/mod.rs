//! Navigation boundary for modal screens.

/// Why a screen was dismissed. Flows only ever issue `Completed`; the
/// remaining reasons originate from the host (cancel button, backdrop
/// click, escape key).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Completed,
    Cancelled,
    Backdrop,
    Escape,
}

/// The host screen or modal a flow runs inside.
pub trait ScreenHost {
    fn dismiss(&mut self, reason: DismissReason);
}
