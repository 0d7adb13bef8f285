//! Tool-related type definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A tool invocation issued by the host agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique identifier for this tool call
    pub id: String,
    /// Name of the tool to call
    pub name: String,
    /// Loosely-typed arguments supplied by the host
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl ToolCall {
    /// Create a new tool call
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Build a call from an arbitrary JSON value; non-objects yield no arguments
    pub fn from_value(id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        let arguments = match arguments {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        Self::new(id, name, arguments)
    }
}

/// Result of a tool execution as reported back to the host
///
/// Use [`ToolResult::success`] and [`ToolResult::error`] instead of building the
/// struct by hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool call ID this result corresponds to
    pub call_id: String,
    /// Name of the tool that was executed
    pub tool_name: String,
    /// Whether the tool execution was successful
    pub success: bool,
    /// Structured output (present on success)
    pub output: Option<Value>,
    /// Error message (present on failure)
    pub error: Option<String>,
    /// Execution time in milliseconds
    pub execution_time_ms: Option<u64>,
}

impl ToolResult {
    /// Create a successful tool result
    pub fn success(call_id: impl Into<String>, tool_name: impl Into<String>, output: Value) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            success: true,
            output: Some(output),
            error: None,
            execution_time_ms: None,
        }
    }

    /// Create a failed tool result
    pub fn error(
        call_id: impl Into<String>,
        tool_name: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            call_id: call_id.into(),
            tool_name: tool_name.into(),
            success: false,
            output: None,
            error: Some(error.into()),
            execution_time_ms: None,
        }
    }

    /// Add execution time
    pub fn with_execution_time(mut self, time_ms: u64) -> Self {
        self.execution_time_ms = Some(time_ms);
        self
    }
}

/// Primitive kinds a tool parameter may declare
///
/// Hosts only understand these five kinds. [`ParamKind::from_type_tag`] maps any
/// declared type tag onto them and never fails: unknown tags become `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    #[default]
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl ParamKind {
    /// Map a declared schema type tag onto a permitted kind
    pub fn from_type_tag(tag: &str) -> Self {
        match tag {
            "string" => ParamKind::String,
            "number" => ParamKind::Number,
            "boolean" => ParamKind::Boolean,
            "object" => ParamKind::Object,
            "array" => ParamKind::Array,
            _ => ParamKind::String,
        }
    }

    /// The JSON schema type tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Number => "number",
            ParamKind::Boolean => "boolean",
            ParamKind::Object => "object",
            ParamKind::Array => "array",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameter definition for a tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolParameter {
    /// Parameter name
    pub name: String,
    /// Parameter description
    pub description: String,
    /// Parameter kind
    #[serde(rename = "type")]
    pub kind: ParamKind,
    /// Whether this parameter is required
    pub required: bool,
}

impl ToolParameter {
    /// Create a required parameter of the given kind
    pub fn new(name: impl Into<String>, kind: ParamKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            required: true,
        }
    }

    /// Set the required flag explicitly
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

/// JSON schema for a tool, in the shape hosts hand to their models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input parameters schema
    pub parameters: Value,
}

impl ToolSchema {
    /// Create a new tool schema
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Vec<ToolParameter>,
    ) -> Self {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in parameters {
            if param.required {
                required.push(Value::String(param.name.clone()));
            }

            let mut param_schema = Map::new();
            param_schema.insert("type".to_string(), param.kind.as_str().into());
            param_schema.insert("description".to_string(), param.description.into());

            properties.insert(param.name, param_schema.into());
        }

        let parameters_schema = serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": required
        });

        Self {
            name: name.into(),
            description: description.into(),
            parameters: parameters_schema,
        }
    }
}
