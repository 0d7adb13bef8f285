//! Method dispatch from tool names to gateway operations

use crate::manifest::{SEND_EMAIL_TOOL, SEND_TEMPLATE_EMAIL_TOOL, TOOL_PREFIX};
use crate::state::SharedState;
use astreus_core::ToolError;
use resend_client::{GatewayError, SendEmailOptions, SendTemplateEmailOptions};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing::{debug, error};

/// Gateway operations reachable through tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendMethod {
    SendEmail,
    SendTemplateEmail,
}

impl ResendMethod {
    /// Underlying method name (tool name without the prefix)
    pub fn as_str(&self) -> &'static str {
        match self {
            ResendMethod::SendEmail => "send_email",
            ResendMethod::SendTemplateEmail => "send_template_email",
        }
    }

    /// Registered tool name (with the prefix)
    pub fn tool_name(&self) -> &'static str {
        match self {
            ResendMethod::SendEmail => SEND_EMAIL_TOOL,
            ResendMethod::SendTemplateEmail => SEND_TEMPLATE_EMAIL_TOOL,
        }
    }

    /// Resolve a tool name, with or without the namespace prefix
    pub fn from_tool_name(tool_name: &str) -> Result<Self, ToolError> {
        method_name(tool_name).parse()
    }
}

impl FromStr for ResendMethod {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "send_email" => Ok(ResendMethod::SendEmail),
            "send_template_email" => Ok(ResendMethod::SendTemplateEmail),
            other => Err(ToolError::UnknownMethod(other.to_string())),
        }
    }
}

/// Strip the namespace prefix from a tool name
pub fn method_name(tool_name: &str) -> &str {
    tool_name.strip_prefix(TOOL_PREFIX).unwrap_or(tool_name)
}

/// Map a gateway failure onto the host-facing error kinds
pub fn tool_error(error: GatewayError) -> ToolError {
    match error {
        GatewayError::Configuration(msg) => ToolError::Configuration(msg),
        GatewayError::Validation(msg) => ToolError::ValidationFailed(msg),
        GatewayError::Delivery(msg) => ToolError::ExecutionFailed(msg),
    }
}

fn coerce<T: DeserializeOwned>(tool_name: &str, params: &Map<String, Value>) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(params.clone())).map_err(|e| {
        error!(tool = %tool_name, error = %e, "Invalid tool parameters");
        ToolError::InvalidArguments(e.to_string())
    })
}

/// Routes tool invocations to the gateway client
#[derive(Clone)]
pub struct Dispatcher {
    state: SharedState,
}

impl Dispatcher {
    pub(crate) fn new(state: SharedState) -> Self {
        Self { state }
    }

    /// Execute the method behind `tool_name` with loosely-typed parameters
    ///
    /// The returned value is always built fresh from the gateway's send result.
    pub async fn dispatch(&self, tool_name: &str, params: &Map<String, Value>) -> Result<Value, ToolError> {
        let client = self.state.client().ok_or_else(|| {
            error!(tool = %tool_name, "Tool invoked before the plugin was initialized");
            ToolError::NotInitialized(
                "Resend plugin is not initialized; call initialize() first".to_string(),
            )
        })?;

        let method = ResendMethod::from_tool_name(tool_name).inspect_err(|e| {
            error!(tool = %tool_name, error = %e, "Unknown Resend method");
        })?;

        debug!(tool = %tool_name, method = method.as_str(), "Dispatching tool call");

        let result = match method {
            ResendMethod::SendEmail => {
                let options: SendEmailOptions = coerce(tool_name, params)?;
                client.send_email(&options).await
            }
            ResendMethod::SendTemplateEmail => {
                let options: SendTemplateEmailOptions = coerce(tool_name, params)?;
                client.send_template_email(&options).await
            }
        }
        .map_err(|e| {
            error!(tool = %tool_name, kind = e.kind(), error = %e, "Resend tool failed");
            tool_error(e)
        })?;

        Ok(serde_json::to_value(result)?)
    }
}
