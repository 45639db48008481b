//! Telegram Bot API notifier.

use async_trait::async_trait;

use rutracker_core::error::NotifyError;
use rutracker_core::ports::Notifier;

use super::TelegramConfig;

/// Sends messages through `sendMessage` with one POST per call. No retries.
pub struct TelegramNotifier {
    config: TelegramConfig,
    client: reqwest::Client,
}

impl TelegramNotifier {
    pub fn new(config: TelegramConfig) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn send_message_url(&self) -> String {
        format!(
            "{}/bot{}/sendMessage",
            self.config.api_url.trim_end_matches('/'),
            self.config.bot_token
        )
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_message(&self, text: &str) -> Result<(), NotifyError> {
        if self.config.bot_token.is_empty() {
            return Err(NotifyError::NotConfigured("TELEGRAM_BOT_TOKEN is empty"));
        }

        let response = self
            .client
            .post(self.send_message_url())
            .form(&[("chat_id", self.config.chat_id.as_str()), ("text", text)])
            .send()
            .await
            // reqwest errors carry the URL, which embeds the token.
            .map_err(|e| NotifyError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Telegram rejected message");
            return Err(NotifyError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(chat_id = %self.config.chat_id, "Telegram message delivered");
        Ok(())
    }
}
