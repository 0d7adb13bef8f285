//! Resend wire payloads
//!
//! These mirror the JSON body of `POST /emails`. Optional fields are omitted rather
//! than sent as `null`.

use crate::types::{Attachment, Tag};
use serde::Serialize;
use serde_json::{Map, Value};

/// Attachment in wire shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireAttachment {
    pub content: String,
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

impl From<&Attachment> for WireAttachment {
    fn from(attachment: &Attachment) -> Self {
        Self {
            content: attachment.content.clone(),
            filename: attachment.filename.clone(),
            content_type: attachment.content_type.clone(),
            content_id: attachment.content_id.clone(),
        }
    }
}

/// Body of a raw html/text send
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailPayload {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<WireAttachment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Body of a templated send; the subject lives inside the template
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplatePayload {
    pub from: String,
    pub to: Vec<String>,
    pub template: String,
    pub data: Map<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Either payload shape, serialized without a discriminator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutboundPayload {
    Email(EmailPayload),
    Template(TemplatePayload),
}

impl OutboundPayload {
    /// Recipients of the message
    pub fn recipients(&self) -> &[String] {
        match self {
            OutboundPayload::Email(payload) => &payload.to,
            OutboundPayload::Template(payload) => &payload.to,
        }
    }

    /// Sender of the message
    pub fn sender(&self) -> &str {
        match self {
            OutboundPayload::Email(payload) => &payload.from,
            OutboundPayload::Template(payload) => &payload.from,
        }
    }

    /// JSON body as sent on the wire
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_email_payload_omits_absent_fields() {
        let payload = OutboundPayload::Email(EmailPayload {
            from: "me@acme.dev".to_string(),
            to: vec!["a@b.com".to_string()],
            subject: "Hi".to_string(),
            html: Some("<p>hi</p>".to_string()),
            text: None,
            reply_to: None,
            cc: vec![],
            bcc: vec![],
            attachments: vec![],
            tags: vec![],
        });

        assert_eq!(
            payload.to_json(),
            json!({
                "from": "me@acme.dev",
                "to": ["a@b.com"],
                "subject": "Hi",
                "html": "<p>hi</p>"
            })
        );
    }

    #[test]
    fn test_wire_attachment_uses_snake_case() {
        let attachment = Attachment::new("logo.png", "AAAA")
            .with_content_type("image/png")
            .with_content_id("logo");
        let wire = serde_json::to_value(WireAttachment::from(&attachment)).unwrap();
        assert_eq!(
            wire,
            json!({
                "content": "AAAA",
                "filename": "logo.png",
                "content_type": "image/png",
                "content_id": "logo"
            })
        );
    }
}
