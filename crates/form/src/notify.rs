//! User-facing notification seam.

/// Fire-and-forget toast-style notifications. No return value is consumed.
pub trait Notifier: Send + Sync {
    fn notify_success(&self, message: &str);
    fn notify_error(&self, message: &str);
}

/// Notifier that emits `tracing` events instead of driving a UI toast.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify_success(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn notify_error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
