//! Mail delivery through an HTTP relay (JSON body, basic auth).

use async_trait::async_trait;
use rent_core::{Notification, Notifier};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

use crate::app_config::MailCredentials;

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Mail relay rejected message with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Serialize)]
struct OutboundMail<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

pub struct HttpMailer {
    client: reqwest::Client,
    endpoint: String,
    credentials: MailCredentials,
}

impl HttpMailer {
    pub fn new(
        endpoint: &str,
        credentials: MailCredentials,
        timeout_seconds: u64,
    ) -> Result<Self, MailError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            credentials,
        })
    }

    pub async fn deliver(&self, notification: &Notification) -> Result<(), MailError> {
        let mail = OutboundMail {
            from: &self.credentials.user,
            to: &self.credentials.to,
            subject: &notification.subject,
            text: &notification.text,
            html: &notification.html,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .basic_auth(&self.credentials.user, Some(self.credentials.pass.expose()))
            .json(&mail)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Rejected { status: status.as_u16(), body });
        }

        debug!("Mail relay accepted message for {}", self.credentials.to);
        Ok(())
    }
}

#[async_trait]
impl Notifier for HttpMailer {
    async fn send(
        &self,
        notification: &Notification,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.deliver(notification).await?)
    }
}
