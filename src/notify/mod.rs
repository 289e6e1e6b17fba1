//! Transient notification surface (toasts).

use std::time::Duration;

/// How long hosts keep a transient notification on screen.
pub const NOTIFICATION_AUTO_DISMISS: Duration = Duration::from_secs(5);

/// Non-blocking notifications, auto-dismissed by the host after
/// [`NOTIFICATION_AUTO_DISMISS`].
pub trait Notifier {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

/// Notifier that forwards to the tracing pipeline; useful for headless
/// hosts and as a default.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify_success(&self, message: &str) {
        tracing::info!(target: "split_core::notify", "{message}");
    }

    fn notify_error(&self, message: &str) {
        tracing::warn!(target: "split_core::notify", "{message}");
    }
}
