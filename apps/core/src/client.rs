//! Advisor backend client.
//!
//! The backend that actually generates advisor replies is an external
//! service; this module owns only the plumbing to reach it. The trait seam
//! lets tests and embedders substitute their own transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::advisor::persona::Persona;
use crate::error::AppError;

/// Request body for the backend `/chat` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Identifies the founder across conversations.
    pub founder_id: String,
    /// The founder's message.
    pub message: String,
    /// The advisor persona answering the message.
    pub agent_type: Persona,
}

/// Response body of the backend `/chat` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// The advisor's reply text.
    pub reply: String,
}

/// Defines the public interface to an advisor reply backend.
///
/// Reply generation itself stays outside this crate; implementations only
/// move messages across the boundary.
#[async_trait]
pub trait AdvisorBackend: Send + Sync + 'static {
    /// Requests an advisor reply for a founder message.
    async fn reply(&self, request: ChatRequest) -> Result<ChatReply, AppError>;
}

/// `AdvisorBackend` implementation talking HTTP to the hosted advisor service.
#[derive(Debug)]
pub struct HttpAdvisorBackend {
    client: Client,
    base_url: Url,
}

impl HttpAdvisorBackend {
    /// Creates a client for the service at `base_url` with a per-request
    /// timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)?;
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn chat_endpoint(&self) -> Result<Url, AppError> {
        Ok(self.base_url.join("chat")?)
    }
}

#[async_trait]
impl AdvisorBackend for HttpAdvisorBackend {
    async fn reply(&self, request: ChatRequest) -> Result<ChatReply, AppError> {
        let endpoint = self.chat_endpoint()?;
        debug!(%endpoint, agent = request.agent_type.display_name(), "sending chat request");

        let response = self.client.post(endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Backend(format!(
                "chat request failed with status {}",
                status
            )));
        }

        let reply = response.json::<ChatReply>().await?;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_wire_format() {
        let request = ChatRequest {
            founder_id: "founder@example.com".to_string(),
            message: "Here is my pitch".to_string(),
            agent_type: Persona::SharkVc,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["founder_id"], "founder@example.com");
        assert_eq!(json["agent_type"], "Shark VC");
    }

    #[test]
    fn test_chat_endpoint_joins_base_url() {
        let backend =
            HttpAdvisorBackend::new("http://localhost:8000", Duration::from_secs(5)).unwrap();
        assert_eq!(
            backend.chat_endpoint().unwrap().as_str(),
            "http://localhost:8000/chat"
        );
    }

    #[test]
    fn test_malformed_base_url_is_rejected() {
        let err = HttpAdvisorBackend::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
