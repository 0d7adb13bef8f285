//! Recording transport for tests

use super::{MailTransport, ProviderResponse, TransportError};
use crate::payload::OutboundPayload;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

enum Behaviour {
    /// Reply with a fresh `re_mock_<n>` id
    Sequential,
    /// Reply with a fixed response
    Fixed(ProviderResponse),
    /// Fail every send
    Failing(String),
}

/// Transport that captures payloads instead of sending them
#[derive(Clone)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<OutboundPayload>>>,
    counter: Arc<AtomicUsize>,
    behaviour: Arc<Behaviour>,
}

impl RecordingTransport {
    /// Accept every payload and answer with sequential ids
    pub fn new() -> Self {
        Self::with_behaviour(Behaviour::Sequential)
    }

    /// Accept every payload and answer with the given response
    pub fn responding(response: ProviderResponse) -> Self {
        Self::with_behaviour(Behaviour::Fixed(response))
    }

    /// Fail every send with the given message
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behaviour(Behaviour::Failing(message.into()))
    }

    fn with_behaviour(behaviour: Behaviour) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            counter: Arc::new(AtomicUsize::new(0)),
            behaviour: Arc::new(behaviour),
        }
    }

    /// All payloads received so far
    pub fn sent(&self) -> Vec<OutboundPayload> {
        self.sent.lock().clone()
    }

    /// Number of send attempts, failed ones included
    pub fn attempts(&self) -> usize {
        self.counter.load(Ordering::SeqCst)
    }

    /// The most recent payload, as wire JSON
    pub fn last_json(&self) -> Option<serde_json::Value> {
        self.sent.lock().last().map(OutboundPayload::to_json)
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailTransport for RecordingTransport {
    async fn send(&self, payload: &OutboundPayload) -> Result<ProviderResponse, TransportError> {
        let attempt = self.counter.fetch_add(1, Ordering::SeqCst) + 1;

        match self.behaviour.as_ref() {
            Behaviour::Failing(message) => Err(TransportError::Other(message.clone())),
            Behaviour::Fixed(response) => {
                self.sent.lock().push(payload.clone());
                Ok(response.clone())
            }
            Behaviour::Sequential => {
                self.sent.lock().push(payload.clone());
                Ok(ProviderResponse::with_id(format!("re_mock_{}", attempt)))
            }
        }
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::TemplatePayload;
    use serde_json::Map;

    fn payload() -> OutboundPayload {
        OutboundPayload::Template(TemplatePayload {
            from: "me@acme.dev".to_string(),
            to: vec!["a@b.com".to_string()],
            template: "t1".to_string(),
            data: Map::new(),
            reply_to: None,
            cc: vec![],
            bcc: vec![],
            tags: vec![],
        })
    }

    #[tokio::test]
    async fn test_records_payloads() {
        let transport = RecordingTransport::new();
        let first = transport.send(&payload()).await.unwrap();
        let second = transport.send(&payload()).await.unwrap();

        assert_eq!(first.id.as_deref(), Some("re_mock_1"));
        assert_eq!(second.id.as_deref(), Some("re_mock_2"));
        assert_eq!(transport.sent().len(), 2);
        assert_eq!(transport.last_json().unwrap()["template"], "t1");
    }

    #[tokio::test]
    async fn test_failing_transport() {
        let transport = RecordingTransport::failing("connection reset");
        let err = transport.send(&payload()).await.unwrap_err();

        assert_eq!(err.to_string(), "connection reset");
        assert_eq!(transport.attempts(), 1);
        assert!(transport.sent().is_empty());
    }
}
