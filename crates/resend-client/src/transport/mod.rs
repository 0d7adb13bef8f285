//! Outbound transport for gateway payloads
//!
//! [`MailTransport`] is the only I/O seam of the gateway. [`HttpTransport`] talks to
//! the Resend API; [`RecordingTransport`] captures payloads for tests.

pub mod http;
pub mod recording;

pub use http::HttpTransport;
pub use recording::RecordingTransport;

use crate::payload::OutboundPayload;
use async_trait::async_trait;
use serde::Deserialize;

/// Successful reply from the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProviderResponse {
    /// Message id assigned by the provider
    #[serde(default)]
    pub id: Option<String>,
}

impl ProviderResponse {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

/// Errors raised by a transport
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP request could not be built, sent or decoded
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("Resend API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Any other transport failure
    #[error("{0}")]
    Other(String),
}

/// Sends one payload to the mail provider
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver a payload and return the provider's reply
    async fn send(&self, payload: &OutboundPayload) -> Result<ProviderResponse, TransportError>;

    /// Transport name used in logs
    fn name(&self) -> &'static str;
}
