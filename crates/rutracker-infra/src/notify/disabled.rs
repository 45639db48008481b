use async_trait::async_trait;

use rutracker_core::error::NotifyError;
use rutracker_core::ports::Notifier;

/// Notifier used when the binary is built without an outbound channel.
pub struct DisabledNotifier;

#[async_trait]
impl Notifier for DisabledNotifier {
    async fn send_message(&self, _text: &str) -> Result<(), NotifyError> {
        tracing::warn!("Notification requested but no notifier is compiled in");
        Err(NotifyError::NotConfigured("built without the telegram feature"))
    }
}
