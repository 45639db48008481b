use async_trait::async_trait;

use crate::error::NotifyError;

/// Outbound messaging channel.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `text` to the configured destination chat.
    async fn send_message(&self, text: &str) -> Result<(), NotifyError>;
}
