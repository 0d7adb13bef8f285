//! Resend HTTP transport
//!
//! Sends payloads to the Resend REST API with reqwest.

use super::{MailTransport, ProviderResponse, TransportError};
use crate::config::ResendConfig;
use crate::payload::OutboundPayload;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

/// Error body returned by Resend on non-2xx replies
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

/// Resend REST transport
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl HttpTransport {
    /// Build a transport honouring the configured timeout and base URL
    pub fn new(config: &ResendConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("astreus-resend/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone().unwrap_or_default(),
            endpoint: config.emails_endpoint(),
        })
    }

    /// Endpoint payloads are posted to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the request for a payload without sending it
    pub fn build_request(&self, payload: &OutboundPayload) -> Result<reqwest::Request, TransportError> {
        let request = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(payload)
            .build()?;
        Ok(request)
    }
}

/// Extract a readable message from a Resend error body
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            message: Some(message),
            name: Some(name),
        }) => format!("{} ({})", message, name),
        Ok(ApiErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ if body.trim().is_empty() => "empty response body".to_string(),
        _ => body.trim().to_string(),
    }
}

#[async_trait]
impl MailTransport for HttpTransport {
    async fn send(&self, payload: &OutboundPayload) -> Result<ProviderResponse, TransportError> {
        let request = self.build_request(payload)?;

        debug!(
            endpoint = %self.endpoint,
            recipients = payload.recipients().len(),
            "Sending email via Resend"
        );

        let response = self.client.execute(request).await?;
        let status = response.status();

        if status.is_success() {
            let reply = response.json::<ProviderResponse>().await?;
            debug!(id = ?reply.id, "Resend accepted email");
            return Ok(reply);
        }

        let body = response.text().await.unwrap_or_default();
        let message = api_error_message(&body);
        error!(status = %status, error = %message, "Resend API error");

        Err(TransportError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn name(&self) -> &'static str {
        "resend-http"
    }
}
