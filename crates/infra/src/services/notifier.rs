use crate::config::NotifierConfig;
use arbor_alert_domain::ID;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

pub const WEBHOOK_KEY_HEADER: &str = "arbor-alert-webhook-key";

/// Delivers a direct message to a chat platform user
#[async_trait::async_trait]
pub trait INotifier: Send + Sync {
    async fn send_direct_message(&self, user_id: &ID, content: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DirectMessagePayload<'a> {
    user_id: &'a str,
    content: &'a str,
}

/// Hands messages to the chat bridge, which owns the bot connection
pub struct WebhookNotifier {
    client: Client,
    config: NotifierConfig,
}

impl WebhookNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait::async_trait]
impl INotifier for WebhookNotifier {
    async fn send_direct_message(&self, user_id: &ID, content: &str) -> anyhow::Result<()> {
        let url = match &self.config.webhook_url {
            Some(url) => url.clone(),
            None => anyhow::bail!("No webhook url configured for direct messages"),
        };

        let payload = DirectMessagePayload {
            user_id: user_id.as_str(),
            content,
        };
        self.client
            .post(url)
            .header(WEBHOOK_KEY_HEADER, &self.config.webhook_key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        debug!("Direct message delivered to user: {}", user_id);
        Ok(())
    }
}
