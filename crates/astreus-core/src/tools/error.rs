//! Error types for tool operations

/// Error type for tool operations
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Arguments could not be coerced into the shape the tool expects
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A required field was missing or empty
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// The provider behind the tool is not configured
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Tool execution failed
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// The tool name does not map to a supported method
    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    /// The tool was invoked before its provider was initialized
    #[error("Not initialized: {0}")]
    NotInitialized(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ToolError {
    /// Stable machine-readable code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ToolError::InvalidArguments(_) => "TOOL_INVALID_ARGS",
            ToolError::ValidationFailed(_) => "TOOL_VALIDATION_FAILED",
            ToolError::Configuration(_) => "TOOL_CONFIGURATION",
            ToolError::ExecutionFailed(_) => "TOOL_EXEC_FAILED",
            ToolError::UnknownMethod(_) => "TOOL_UNKNOWN_METHOD",
            ToolError::NotInitialized(_) => "TOOL_NOT_INITIALIZED",
            ToolError::Json(_) => "TOOL_JSON_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = ToolError::UnknownMethod("resend_fax".to_string());
        assert_eq!(err.to_string(), "Unknown method: resend_fax");
        assert_eq!(err.error_code(), "TOOL_UNKNOWN_METHOD");

        let err = ToolError::NotInitialized("resend".to_string());
        assert!(err.to_string().contains("resend"));
        assert_eq!(err.error_code(), "TOOL_NOT_INITIALIZED");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ToolError = json_err.into();
        assert_eq!(err.error_code(), "TOOL_JSON_ERROR");
    }
}
