//! Resend gateway client

use crate::config::ResendConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::payload::{EmailPayload, OutboundPayload, TemplatePayload, WireAttachment};
use crate::transport::{HttpTransport, MailTransport};
use crate::types::{SendEmailOptions, SendResult, SendTemplateEmailOptions};
use std::sync::Arc;
use tracing::{debug, error, info};

const SEND_EMAIL: &str = "send_email";
const SEND_TEMPLATE_EMAIL: &str = "send_template_email";

/// An empty body counts as no body
fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Client for the Resend send-email API
#[derive(Clone)]
pub struct ResendClient {
    config: ResendConfig,
    transport: Arc<dyn MailTransport>,
}

impl ResendClient {
    /// Create a client backed by the Resend HTTP API
    pub fn new(config: ResendConfig) -> GatewayResult<Self> {
        let transport = HttpTransport::new(&config).map_err(|e| {
            error!(error = %e, "Failed to build Resend HTTP client");
            GatewayError::Configuration(format!("failed to build HTTP client: {}", e))
        })?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client with a custom transport
    pub fn with_transport(config: ResendConfig, transport: Arc<dyn MailTransport>) -> Self {
        Self { config, transport }
    }

    /// The configuration this client was built from
    pub fn config(&self) -> &ResendConfig {
        &self.config
    }

    /// True iff a non-empty credential is present
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn ensure_configured(&self, operation: &str) -> GatewayResult<()> {
        if self.is_configured() {
            return Ok(());
        }
        error!(operation, "Resend API key is not configured");
        Err(GatewayError::Configuration(
            "Resend API key is not configured".to_string(),
        ))
    }

    fn validation_error(operation: &str, message: &str) -> GatewayError {
        error!(operation, error = %message, "Rejected email options");
        GatewayError::Validation(message.to_string())
    }

    /// Validate raw-send options and build the wire payload
    pub fn build_email_payload(&self, options: &SendEmailOptions) -> GatewayResult<EmailPayload> {
        if options.to.is_empty() {
            return Err(Self::validation_error(SEND_EMAIL, "'to' is required"));
        }
        if options.subject.is_empty() {
            return Err(Self::validation_error(SEND_EMAIL, "'subject' is required"));
        }
        let html = non_empty(options.html.as_deref());
        let text = non_empty(options.text.as_deref());
        if html.is_none() && text.is_none() {
            return Err(Self::validation_error(
                SEND_EMAIL,
                "either 'html' or 'text' must be provided",
            ));
        }

        Ok(EmailPayload {
            from: self.sender(options.from.as_deref()),
            to: options.to.clone(),
            subject: options.subject.clone(),
            html,
            text,
            reply_to: self.reply_to(options.reply_to.as_deref()),
            cc: options.cc.clone(),
            bcc: options.bcc.clone(),
            attachments: options.attachments.iter().map(WireAttachment::from).collect(),
            tags: options.tags.clone(),
        })
    }

    /// Validate templated-send options and build the wire payload
    pub fn build_template_payload(
        &self,
        options: &SendTemplateEmailOptions,
    ) -> GatewayResult<TemplatePayload> {
        if options.template_id.is_empty() {
            return Err(Self::validation_error(
                SEND_TEMPLATE_EMAIL,
                "'templateId' is required",
            ));
        }
        if options.to.is_empty() {
            return Err(Self::validation_error(SEND_TEMPLATE_EMAIL, "'to' is required"));
        }

        Ok(TemplatePayload {
            from: self.sender(options.from.as_deref()),
            to: options.to.clone(),
            template: options.template_id.clone(),
            data: options.template_data.clone(),
            reply_to: self.reply_to(options.reply_to.as_deref()),
            cc: options.cc.clone(),
            bcc: options.bcc.clone(),
            tags: options.tags.clone(),
        })
    }

    /// Send a raw html/text email
    pub async fn send_email(&self, options: &SendEmailOptions) -> GatewayResult<SendResult> {
        self.ensure_configured(SEND_EMAIL)?;
        let payload = self.build_email_payload(options)?;
        self.deliver(SEND_EMAIL, OutboundPayload::Email(payload)).await
    }

    /// Send an email rendered from a provider-side template
    pub async fn send_template_email(
        &self,
        options: &SendTemplateEmailOptions,
    ) -> GatewayResult<SendResult> {
        self.ensure_configured(SEND_TEMPLATE_EMAIL)?;
        let payload = self.build_template_payload(options)?;
        self.deliver(SEND_TEMPLATE_EMAIL, OutboundPayload::Template(payload))
            .await
    }

    fn sender(&self, explicit: Option<&str>) -> String {
        explicit.unwrap_or(&self.config.from).to_string()
    }

    fn reply_to(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.config.reply_to.clone())
    }

    async fn deliver(
        &self,
        operation: &'static str,
        payload: OutboundPayload,
    ) -> GatewayResult<SendResult> {
        debug!(
            operation,
            transport = self.transport.name(),
            from = %payload.sender(),
            recipients = payload.recipients().len(),
            "Dispatching email"
        );

        let response = self.transport.send(&payload).await.map_err(|e| {
            error!(operation, error = %e, "Failed to send email");
            GatewayError::Delivery(e.to_string())
        })?;

        match response.id.filter(|id| !id.is_empty()) {
            Some(id) => {
                info!(operation, id = %id, "Email sent");
                Ok(SendResult::sent(id))
            }
            None => {
                error!(operation, "Resend returned no message id");
                Err(GatewayError::Delivery(
                    "no response from Resend: empty message id".to_string(),
                ))
            }
        }
    }
}

impl std::fmt::Debug for ResendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendClient")
            .field("config", &self.config)
            .field("transport", &self.transport.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{MockMailTransport, ProviderResponse, RecordingTransport, TransportError};
    use crate::types::{Attachment, Tag};
    use serde_json::json;

    fn configured() -> ResendConfig {
        ResendConfig::new("re_test").with_from("default@acme.dev")
    }

    fn client_with(config: ResendConfig, transport: RecordingTransport) -> ResendClient {
        ResendClient::with_transport(config, Arc::new(transport))
    }

    #[tokio::test]
    async fn test_send_email_uses_default_sender() {
        let transport = RecordingTransport::responding(ProviderResponse::with_id("abc123"));
        let client = client_with(configured(), transport.clone());

        let result = client
            .send_email(&SendEmailOptions::new("a@b.com", "Hi").with_html("<p>hi</p>"))
            .await
            .unwrap();

        assert_eq!(result, SendResult::sent("abc123"));
        let body = transport.last_json().unwrap();
        assert_eq!(body["from"], "default@acme.dev");
        assert_eq!(body["to"], json!(["a@b.com"]));
        assert!(body.get("reply_to").is_none());
    }

    #[tokio::test]
    async fn test_explicit_sender_and_reply_to_win() {
        let transport = RecordingTransport::new();
        let config = configured().with_reply_to("support@acme.dev");
        let client = client_with(config, transport.clone());

        client
            .send_email(
                &SendEmailOptions::new("a@b.com", "Hi")
                    .with_text("hi")
                    .with_from("ceo@acme.dev")
                    .with_reply_to("ceo-desk@acme.dev"),
            )
            .await
            .unwrap();

        let body = transport.last_json().unwrap();
        assert_eq!(body["from"], "ceo@acme.dev");
        assert_eq!(body["reply_to"], "ceo-desk@acme.dev");
    }

    #[tokio::test]
    async fn test_default_reply_to_applies() {
        let transport = RecordingTransport::new();
        let client = client_with(configured().with_reply_to("support@acme.dev"), transport.clone());

        client
            .send_email(&SendEmailOptions::new("a@b.com", "Hi").with_text("hi"))
            .await
            .unwrap();

        assert_eq!(transport.last_json().unwrap()["reply_to"], "support@acme.dev");
    }

    #[tokio::test]
    async fn test_passes_through_optional_fields() {
        let transport = RecordingTransport::new();
        let client = client_with(configured(), transport.clone());

        client
            .send_email(
                &SendEmailOptions::new("a@b.com", "Report")
                    .with_text("see attached")
                    .with_cc("boss@acme.dev")
                    .with_bcc("audit@acme.dev")
                    .with_attachment(Attachment::new("r.csv", "YSxi").with_content_type("text/csv"))
                    .with_tag(Tag::new("category", "report")),
            )
            .await
            .unwrap();

        let body = transport.last_json().unwrap();
        assert_eq!(body["cc"], json!(["boss@acme.dev"]));
        assert_eq!(body["bcc"], json!(["audit@acme.dev"]));
        assert_eq!(
            body["attachments"],
            json!([{"content": "YSxi", "filename": "r.csv", "content_type": "text/csv"}])
        );
        assert_eq!(body["tags"], json!([{"name": "category", "value": "report"}]));
    }

    #[tokio::test]
    async fn test_missing_body_is_validation_error_without_network() {
        let mut transport = MockMailTransport::new();
        transport.expect_send().never();
        transport.expect_name().return_const("mock");
        let client = ResendClient::with_transport(configured(), Arc::new(transport));

        let err = client
            .send_email(&SendEmailOptions::new("a@b.com", "Hi"))
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_bodies_are_validation_error() {
        let transport = RecordingTransport::new();
        let client = client_with(configured(), transport.clone());

        let err = client
            .send_email(&SendEmailOptions::new("a@b.com", "Hi").with_html("").with_text(""))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GatewayError::Validation("either 'html' or 'text' must be provided".to_string())
        );
        assert_eq!(transport.attempts(), 0);
    }

    #[tokio::test]
    async fn test_empty_html_is_dropped_when_text_present() {
        let transport = RecordingTransport::new();
        let client = client_with(configured(), transport.clone());

        client
            .send_email(&SendEmailOptions::new("a@b.com", "Hi").with_html("").with_text("hi"))
            .await
            .unwrap();

        let body = transport.last_json().unwrap();
        assert!(body.get("html").is_none());
        assert_eq!(body["text"], "hi");
    }

    #[tokio::test]
    async fn test_missing_recipient_or_subject_is_validation_error() {
        let client = client_with(configured(), RecordingTransport::new());

        let mut options = SendEmailOptions::new("a@b.com", "").with_text("hi");
        let err = client.send_email(&options).await.unwrap_err();
        assert_eq!(err, GatewayError::Validation("'subject' is required".to_string()));

        options.subject = "Hi".to_string();
        options.to.clear();
        let err = client.send_email(&options).await.unwrap_err();
        assert_eq!(err, GatewayError::Validation("'to' is required".to_string()));
    }

    #[tokio::test]
    async fn test_unconfigured_never_calls_transport() {
        let mut transport = MockMailTransport::new();
        transport.expect_send().never();
        transport.expect_name().return_const("mock");
        let client = ResendClient::with_transport(ResendConfig::default(), Arc::new(transport));

        assert!(!client.is_configured());

        let err = client
            .send_email(&SendEmailOptions::new("a@b.com", "Hi").with_html("<p>hi</p>"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Configuration(_)));

        let err = client
            .send_template_email(&SendTemplateEmailOptions::new("a@b.com", "t1"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Configuration(_)));
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_delivery_error() {
        let mut transport = MockMailTransport::new();
        transport.expect_name().return_const("mock");
        transport.expect_send().times(1).returning(|_| {
            Err(TransportError::Api {
                status: 422,
                message: "Invalid `to` field".to_string(),
            })
        });
        let client = ResendClient::with_transport(configured(), Arc::new(transport));

        let err = client
            .send_email(&SendEmailOptions::new("a@b.com", "Hi").with_text("hi"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            GatewayError::Delivery("Resend API error (422): Invalid `to` field".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_id_is_delivery_error() {
        for response in [ProviderResponse::default(), ProviderResponse::with_id("")] {
            let client = client_with(configured(), RecordingTransport::responding(response));
            let err = client
                .send_email(&SendEmailOptions::new("a@b.com", "Hi").with_text("hi"))
                .await
                .unwrap_err();
            assert!(matches!(err, GatewayError::Delivery(_)));
            assert!(err.to_string().contains("no response"));
        }
    }

    #[tokio::test]
    async fn test_template_payload_shape() {
        let transport = RecordingTransport::responding(ProviderResponse::with_id("tpl_1"));
        let client = client_with(configured(), transport.clone());

        let result = client
            .send_template_email(&SendTemplateEmailOptions::new("a@b.com", "t1").with_data("name", "X"))
            .await
            .unwrap();

        assert_eq!(result.id, "tpl_1");
        assert_eq!(
            transport.last_json().unwrap(),
            json!({
                "from": "default@acme.dev",
                "to": ["a@b.com"],
                "template": "t1",
                "data": {"name": "X"}
            })
        );
    }

    #[tokio::test]
    async fn test_template_explicit_sender_and_reply_to_win() {
        let transport = RecordingTransport::new();
        let client = client_with(configured().with_reply_to("support@acme.dev"), transport.clone());

        client
            .send_template_email(
                &SendTemplateEmailOptions::new("a@b.com", "t1")
                    .with_from("ceo@acme.dev")
                    .with_reply_to("ceo-desk@acme.dev"),
            )
            .await
            .unwrap();

        let body = transport.last_json().unwrap();
        assert_eq!(body["from"], "ceo@acme.dev");
        assert_eq!(body["reply_to"], "ceo-desk@acme.dev");
    }

    #[tokio::test]
    async fn test_template_requires_template_id() {
        let transport = RecordingTransport::new();
        let client = client_with(configured(), transport.clone());

        let err = client
            .send_template_email(&SendTemplateEmailOptions::new("a@b.com", ""))
            .await
            .unwrap_err();

        assert_eq!(err, GatewayError::Validation("'templateId' is required".to_string()));
        assert_eq!(transport.attempts(), 0);
    }
}
