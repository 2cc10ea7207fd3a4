use async_trait::async_trait;
use serde::Serialize;

use crate::core::config::MailerConfig;
use crate::core::error::{AppError, Result};

/// Outbound email payload, shaped for JSON email APIs.
#[derive(Debug, Clone, Serialize)]
pub struct MailMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
}

/// Delivery seam. Production uses [`HttpMailTransport`]; tests substitute a
/// recording implementation to observe sends.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: &MailMessage) -> Result<()>;
}

/// Posts messages to an HTTP email API as JSON with bearer auth.
///
/// Without an API key the transport is disabled: sends log and succeed
/// without leaving the process.
pub struct HttpMailTransport {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
}

impl HttpMailTransport {
    pub fn new(config: &MailerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl MailTransport for HttpMailTransport {
    async fn send(&self, message: &MailMessage) -> Result<()> {
        let Some(api_key) = &self.api_key else {
            tracing::info!(
                "Mailer disabled (no API key), dropping \"{}\" to {}",
                message.subject,
                message.to.join(", ")
            );
            return Ok(());
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(api_key)
            .json(message)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Email send failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Email API returned HTTP {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}
