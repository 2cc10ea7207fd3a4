//! Transactional email module.
//!
//! Sends are fire-and-forget: each returns the spawned task's `JoinHandle`
//! so callers (and tests) can observe the side effect, but request handlers
//! never await delivery. Delivery failures are logged and swallowed.

mod transport;

pub use transport::{HttpMailTransport, MailMessage, MailTransport};

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::core::config::MailerConfig;

pub struct Mailer {
    transport: Arc<dyn MailTransport>,
    from_address: String,
}

impl Mailer {
    pub fn new(config: &MailerConfig) -> Self {
        Self {
            transport: Arc::new(HttpMailTransport::new(config)),
            from_address: config.from_address.clone(),
        }
    }

    /// Construct with a custom transport. Used by tests to record sends.
    #[allow(dead_code)]
    pub fn with_transport(transport: Arc<dyn MailTransport>, from_address: String) -> Self {
        Self {
            transport,
            from_address,
        }
    }

    pub fn send_welcome(&self, email: &str, name: &str) -> JoinHandle<()> {
        self.dispatch(MailMessage {
            from: self.from_address.clone(),
            to: vec![email.to_string()],
            subject: "Welcome aboard".to_string(),
            text: format!("Welcome to the app, {}. Let us know how you get along.", name),
        })
    }

    pub fn send_cancellation(&self, email: &str, name: &str) -> JoinHandle<()> {
        self.dispatch(MailMessage {
            from: self.from_address.clone(),
            to: vec![email.to_string()],
            subject: "Sorry to see you go".to_string(),
            text: format!("Goodbye, {}. We hope to see you back sometime soon.", name),
        })
    }

    fn dispatch(&self, message: MailMessage) -> JoinHandle<()> {
        let transport = Arc::clone(&self.transport);
        tokio::spawn(async move {
            if let Err(e) = transport.send(&message).await {
                tracing::warn!(
                    "Email delivery failed for \"{}\" to {}: {}",
                    message.subject,
                    message.to.join(", "),
                    e
                );
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Result;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<MailMessage>>,
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn send(&self, message: &MailMessage) -> Result<()> {
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_welcome_send_is_observable_and_fires_once() {
        let transport = Arc::new(RecordingTransport::default());
        let mailer = Mailer::with_transport(transport.clone(), "accounts@example.com".to_string());

        mailer
            .send_welcome("new@example.com", "New Person")
            .await
            .unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, vec!["new@example.com".to_string()]);
        assert_eq!(sent[0].from, "accounts@example.com");
        assert!(sent[0].text.contains("New Person"));
    }

    #[tokio::test]
    async fn test_cancellation_send_is_observable() {
        let transport = Arc::new(RecordingTransport::default());
        let mailer = Mailer::with_transport(transport.clone(), "accounts@example.com".to_string());

        mailer
            .send_cancellation("gone@example.com", "Old Person")
            .await
            .unwrap();

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Sorry to see you go");
    }

    #[tokio::test]
    async fn test_disabled_http_transport_swallows_sends() {
        let config = MailerConfig {
            api_url: "http://localhost:1/emails".to_string(),
            api_key: None,
            from_address: "accounts@example.com".to_string(),
        };
        let mailer = Mailer::new(&config);

        // No API key: the spawned task completes without attempting delivery.
        mailer.send_welcome("new@example.com", "Anyone").await.unwrap();
    }
}
