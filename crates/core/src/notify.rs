use tracing::info;

use crate::models::notification::NotificationKind;

/// Fire-and-forget notification delivery.
///
/// Implementations must never fail the calling operation; delivery errors
/// are logged and dropped.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str);
}

/// Sink that only writes to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, kind: NotificationKind, title: &str, message: &str) {
        info!("Notification [{}] {}: {}", kind, title, message);
    }
}
