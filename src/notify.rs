/// Severity of a toast-style notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// Fire-and-forget display surface for user-facing messages. The feed core
/// never calls this itself; the surrounding UI layer does, e.g. to report a
/// failed sort before falling back to collection order.
pub trait NotificationSink {
    fn show(&self, message: &str, kind: NotificationKind);
}

/// Routes notifications to the process log.
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn show(&self, message: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Info | NotificationKind::Success => log::info!("{}", message),
            NotificationKind::Error => log::error!("{}", message),
        }
    }
}
