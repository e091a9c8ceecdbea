use crate::config::PushoverConfig;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{error, info, instrument};

/// Outbound payload for the Pushover messages API.
#[derive(Debug, Clone, Serialize)]
pub struct PushoverMessage {
    pub token: String,
    pub user: String,
    pub title: String,
    pub message: String,
    pub sound: String,
    pub priority: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
}

#[async_trait]
pub trait QuoteNotifier: Send + Sync {
    /// Deliver one notification. Best-effort: callers treat a failure here
    /// the same as success.
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError>;
}

/// What the service wants delivered, independent of the transport fields.
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub url: Option<String>,
    pub url_title: Option<String>,
}

pub struct PushoverNotifier {
    client: Client,
    config: PushoverConfig,
}

impl PushoverNotifier {
    pub fn new(client: Client, config: PushoverConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl QuoteNotifier for PushoverNotifier {
    #[instrument(skip(self, notification), fields(title = %notification.title))]
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        info!("Sending Pushover notification");

        let payload = PushoverMessage {
            token: self.config.token.clone(),
            user: self.config.user.clone(),
            title: notification.title,
            message: notification.message,
            sound: "cashregister".to_string(),
            priority: 1,
            url: notification.url,
            url_title: notification.url_title,
        };

        let response = self
            .client
            .post(&self.config.api_url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach Pushover API: {}", e);
                NotifyError::ConnectionError(format!("Send failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Pushover rejected notification with status {}: {}", status, body);
            return Err(NotifyError::DeliveryError(format!(
                "Notification rejected with status {}: {}",
                status, body
            )));
        }

        info!("Pushover notification sent");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Delivery error: {0}")]
    DeliveryError(String),
}
