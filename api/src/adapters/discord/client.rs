//! Discord webhook client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::domain::entities::ReplyTarget;
use crate::domain::ports::{BotToken, NotificationSink, ReplyPayload};
use crate::error::NotifyError;

/// Implementation of the notification sink over Discord interaction webhooks
pub struct DiscordWebhookClient {
    http: Client,
    base_url: String,
}

impl DiscordWebhookClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn webhook_url(&self, target: &ReplyTarget) -> String {
        format!(
            "{}/webhooks/{}/{}",
            self.base_url, target.application_id, target.token
        )
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<(), NotifyError> {
        let status = response.status();

        // Only a plain 200 counts as delivered
        if status == StatusCode::OK {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(NotifyError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl NotificationSink for DiscordWebhookClient {
    async fn post(
        &self,
        target: &ReplyTarget,
        token: &BotToken,
        payload: &ReplyPayload,
    ) -> Result<(), NotifyError> {
        let response = self
            .http
            .post(self.webhook_url(target))
            .header("Authorization", token.authorization_header())
            .json(payload)
            .send()
            .await?;

        self.handle_response(response).await
    }
}
