//! Static tool manifests
//!
//! A manifest is the declarative definition of a tool: name, description and an
//! OpenAPI-style parameter block (`{type, properties, required}`). Manifests are
//! built once and never change; the plugin's registry is derived from them.

use astreus_core::{ParamKind, ToolParameter};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Prefix shared by every tool this crate exposes
pub const TOOL_PREFIX: &str = "resend_";

/// Tool name for a raw html/text send
pub const SEND_EMAIL_TOOL: &str = "resend_send_email";

/// Tool name for a templated send
pub const SEND_TEMPLATE_EMAIL_TOOL: &str = "resend_send_template_email";

/// One declared property of a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySpec {
    /// Declared type tag; not restricted to the kinds hosts understand
    #[serde(rename = "type")]
    pub type_tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl PropertySpec {
    fn new(type_tag: &str, description: &str) -> Self {
        Self {
            type_tag: type_tag.to_string(),
            description: Some(description.to_string()),
        }
    }
}

/// Declared properties, kept in authoring order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties(Vec<(String, PropertySpec)>);

impl Properties {
    /// Add or replace a property; a replaced property keeps its position
    pub fn insert(&mut self, name: impl Into<String>, spec: PropertySpec) {
        let name = name.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = spec,
            None => self.0.push((name, spec)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertySpec)> {
        self.0.iter().map(|(name, spec)| (name.as_str(), spec))
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, spec) in &self.0 {
            map.serialize_entry(name, spec)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Properties {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PropertiesVisitor;

        impl<'de> Visitor<'de> for PropertiesVisitor {
            type Value = Properties;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of property name to {type, description}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Properties, A::Error> {
                let mut properties = Properties::default();
                while let Some((name, spec)) = access.next_entry::<String, PropertySpec>()? {
                    properties.insert(name, spec);
                }
                Ok(properties)
            }
        }

        deserializer.deserialize_map(PropertiesVisitor)
    }
}

/// OpenAPI-style parameter block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestParameters {
    #[serde(rename = "type")]
    pub schema_type: String,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub required: Vec<String>,
}

impl ManifestParameters {
    /// Convert the declared properties into tool parameters
    ///
    /// Every property yields one parameter. Unknown type tags become `string`,
    /// a missing description becomes empty and `required` reflects membership in
    /// the manifest's `required` list.
    pub fn to_parameters(&self) -> Vec<ToolParameter> {
        self.properties
            .iter()
            .map(|(name, spec)| {
                ToolParameter::new(
                    name,
                    ParamKind::from_type_tag(&spec.type_tag),
                    spec.description.clone().unwrap_or_default(),
                )
                .with_required(self.required.iter().any(|r| r == name))
            })
            .collect()
    }
}

/// Declarative definition of one tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolManifest {
    pub name: String,
    pub description: String,
    pub parameters: ManifestParameters,
}

struct ManifestBuilder {
    name: &'static str,
    description: &'static str,
    properties: Properties,
    required: Vec<String>,
}

impl ManifestBuilder {
    fn new(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            properties: Properties::default(),
            required: Vec::new(),
        }
    }

    fn required(mut self, name: &str, type_tag: &str, description: &str) -> Self {
        self.required.push(name.to_string());
        self.optional(name, type_tag, description)
    }

    fn optional(mut self, name: &str, type_tag: &str, description: &str) -> Self {
        self.properties.insert(name, PropertySpec::new(type_tag, description));
        self
    }

    fn build(self) -> ToolManifest {
        ToolManifest {
            name: self.name.to_string(),
            description: self.description.to_string(),
            parameters: ManifestParameters {
                schema_type: "object".to_string(),
                properties: self.properties,
                required: self.required,
            },
        }
    }
}

static MANIFESTS: LazyLock<Vec<ToolManifest>> = LazyLock::new(|| {
    vec![
        ManifestBuilder::new(
            SEND_EMAIL_TOOL,
            "Send an email through Resend. Provide 'html' and/or 'text' for the body.",
        )
        .required("to", "string", "Recipient email address, or an array of addresses")
        .required("subject", "string", "Email subject line")
        .optional("html", "string", "HTML body")
        .optional("text", "string", "Plain-text body")
        .optional("from", "string", "Sender address; defaults to the configured sender")
        .optional("replyTo", "string", "Reply-to address; defaults to the configured reply-to")
        .optional("cc", "array", "CC recipient addresses")
        .optional("bcc", "array", "BCC recipient addresses")
        .optional(
            "attachments",
            "array",
            "Attachments: [{content (base64), filename, contentType?, contentId?}]",
        )
        .optional("tags", "array", "Categorization tags: [{name, value}]")
        .build(),
        ManifestBuilder::new(
            SEND_TEMPLATE_EMAIL_TOOL,
            "Send an email rendered from a Resend template. The subject comes from the template.",
        )
        .required("to", "string", "Recipient email address, or an array of addresses")
        .required("templateId", "string", "Identifier of the Resend template")
        .optional("templateData", "object", "Values merged into the template")
        .optional("from", "string", "Sender address; defaults to the configured sender")
        .optional("replyTo", "string", "Reply-to address; defaults to the configured reply-to")
        .optional("cc", "array", "CC recipient addresses")
        .optional("bcc", "array", "BCC recipient addresses")
        .optional("tags", "array", "Categorization tags: [{name, value}]")
        .build(),
    ]
});

/// The static manifest list
pub fn manifests() -> &'static [ToolManifest] {
    &MANIFESTS
}
