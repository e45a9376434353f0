//! Notification channel interface.

use tracing::info;

use crate::error::NotifyError;

#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `text` to `destination` (a chat id for Telegram).
    async fn send(&self, destination: &str, text: &str) -> Result<(), NotifyError>;

    /// Channel name for logs.
    fn name(&self) -> &str;
}

/// Used when no messaging credentials are configured: the alert is only
/// written to the log.
#[derive(Debug, Default, Clone)]
pub struct LogOnlyNotifier;

#[async_trait::async_trait]
impl Notifier for LogOnlyNotifier {
    async fn send(&self, destination: &str, text: &str) -> Result<(), NotifyError> {
        info!(destination = %destination, message = %text, "Notification (log only, no credentials)");
        Ok(())
    }

    fn name(&self) -> &str {
        "log-only"
    }
}
