//! Public option and result types
//!
//! Field names follow the host-facing camelCase contract (`replyTo`, `templateId`);
//! translation to the provider's wire names happens in [`crate::payload`].

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Accept either a single address or a list of addresses
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(OneOrMany::One(address)) => vec![address],
        Some(OneOrMany::Many(addresses)) => addresses,
    })
}

/// Treat an explicit `null` like an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// File attached to an outbound message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Base64-encoded file content
    pub content: String,
    /// File name shown to the recipient
    pub filename: String,
    /// MIME type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Content id for inline images (`cid:` references)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_id: Option<String>,
}

impl Attachment {
    /// Attach already base64-encoded content
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
            content_type: None,
            content_id: None,
        }
    }

    /// Attach raw bytes, encoding them as base64
    pub fn from_bytes(filename: impl Into<String>, bytes: &[u8]) -> Self {
        Self::new(filename, STANDARD.encode(bytes))
    }

    /// Set the MIME type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Mark as inline content referenced by `cid:<content_id>`
    pub fn with_content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = Some(content_id.into());
        self
    }
}

/// Categorization tag attached to a message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Options for a raw (html/text) send
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailOptions {
    /// Recipient address(es)
    #[serde(default, deserialize_with = "one_or_many")]
    pub to: Vec<String>,
    /// Subject line
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,
    /// HTML body
    #[serde(default)]
    pub html: Option<String>,
    /// Plain-text body
    #[serde(default)]
    pub text: Option<String>,
    /// Sender override
    #[serde(default)]
    pub from: Option<String>,
    /// Reply-to override
    #[serde(default)]
    pub reply_to: Option<String>,
    /// CC recipients
    #[serde(default, deserialize_with = "one_or_many")]
    pub cc: Vec<String>,
    /// BCC recipients
    #[serde(default, deserialize_with = "one_or_many")]
    pub bcc: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub attachments: Vec<Attachment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

impl SendEmailOptions {
    /// Create options for a single recipient
    pub fn new(to: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            to: vec![to.into()],
            subject: subject.into(),
            ..Self::default()
        }
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    pub fn with_cc(mut self, cc: impl Into<String>) -> Self {
        self.cc.push(cc.into());
        self
    }

    pub fn with_bcc(mut self, bcc: impl Into<String>) -> Self {
        self.bcc.push(bcc.into());
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}

/// Options for a templated send
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTemplateEmailOptions {
    /// Recipient address(es)
    #[serde(default, deserialize_with = "one_or_many")]
    pub to: Vec<String>,
    /// Provider-side template identifier
    #[serde(default, deserialize_with = "null_as_default")]
    pub template_id: String,
    /// Values merged into the template
    #[serde(default, deserialize_with = "null_as_default")]
    pub template_data: Map<String, Value>,
    /// Sender override
    #[serde(default)]
    pub from: Option<String>,
    /// Reply-to override
    #[serde(default)]
    pub reply_to: Option<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub cc: Vec<String>,
    #[serde(default, deserialize_with = "one_or_many")]
    pub bcc: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<Tag>,
}

impl SendTemplateEmailOptions {
    /// Create options for a single recipient
    pub fn new(to: impl Into<String>, template_id: impl Into<String>) -> Self {
        Self {
            to: vec![to.into()],
            template_id: template_id.into(),
            ..Self::default()
        }
    }

    /// Set one template variable
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.template_data.insert(key.into(), value.into());
        self
    }

    pub fn with_from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    pub fn with_reply_to(mut self, reply_to: impl Into<String>) -> Self {
        self.reply_to = Some(reply_to.into());
        self
    }

    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }
}

/// Outcome of a successful send
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    /// Provider-issued message id
    pub id: String,
    pub success: bool,
}

impl SendResult {
    pub fn sent(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            success: true,
        }
    }
}
