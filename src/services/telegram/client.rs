use serde_json::json;
use tracing::debug;

use crate::error::NotifyError;
use crate::services::notifier::Notifier;

pub const TELEGRAM_BASE_URL: &str = "https://api.telegram.org";

pub struct TelegramNotifier {
    client: reqwest::Client,
    base_url: String,
    bot_token: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self::with_client(TELEGRAM_BASE_URL, bot_token, reqwest::Client::new())
    }

    pub fn with_client(
        base_url: impl Into<String>,
        bot_token: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
        }
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, self.bot_token)
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, destination: &str, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&json!({ "chat_id": destination, "text": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        debug!(chat_id = %destination, "Telegram: message delivered");
        Ok(())
    }

    fn name(&self) -> &str {
        "telegram"
    }
}
