use async_trait::async_trait;
use rent_shared::SubmissionKind;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Non-2xx answer; displays as the server's response text.
    #[error("{body}")]
    Rejected { status: u16, body: String },
}

pub fn endpoint_path(kind: SubmissionKind) -> &'static str {
    match kind {
        SubmissionKind::Booking => "/api/save-booking",
        SubmissionKind::Contact => "/api/save-contact",
    }
}

/// Sends one intake body to the server. No retries.
#[async_trait]
pub trait IntakeTransport: Send + Sync {
    async fn submit(&self, kind: SubmissionKind, body: &Value) -> Result<(), TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpIntakeClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpIntakeClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn url(&self, kind: SubmissionKind) -> String {
        format!("{}{}", self.base_url, endpoint_path(kind))
    }
}

#[async_trait]
impl IntakeTransport for HttpIntakeClient {
    async fn submit(&self, kind: SubmissionKind, body: &Value) -> Result<(), TransportError> {
        let url = self.url(kind);
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(TransportError::Rejected { status: status.as_u16(), body });
        }

        debug!("POST {} -> {}", url, status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let client = HttpIntakeClient::new("http://localhost:3000/");
        assert_eq!(client.url(SubmissionKind::Booking), "http://localhost:3000/api/save-booking");
        assert_eq!(client.url(SubmissionKind::Contact), "http://localhost:3000/api/save-contact");
    }

    #[test]
    fn test_rejection_displays_body_text() {
        let err = TransportError::Rejected { status: 400, body: "Missing booking data".into() };
        assert_eq!(err.to_string(), "Missing booking data");
    }
}
