//! Error types for the email gateway

/// Result type for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors surfaced by the gateway
///
/// Provider and transport failures never escape as their own types; they are
/// folded into [`GatewayError::Delivery`] with the original message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    /// The credential is missing or the client could not be built
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A required field is missing
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider call failed or returned no message id
    #[error("Delivery error: {0}")]
    Delivery(String),
}

impl GatewayError {
    /// Short kind label used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Configuration(_) => "configuration",
            GatewayError::Validation(_) => "validation",
            GatewayError::Delivery(_) => "delivery",
        }
    }
}
