//! Resend transactional email for Astreus agents
//!
//! Facade over the workspace crates:
//!
//! - [`astreus_core`] - tool and plugin contracts shared with the host
//! - [`resend_client`] - the Resend email gateway
//! - [`resend_tools`] - the tools and the [`ResendPlugin`] the host loads
//!
//! ```ignore
//! use astreus_resend::{Plugin, ResendPlugin, init_default_logging};
//!
//! init_default_logging();
//! let mut plugin = ResendPlugin::from_env()?;
//! plugin.initialize().await?;
//! let result = plugin
//!     .execute("resend_send_email", params)
//!     .await?;
//! ```

pub mod logging;

pub use astreus_core;
pub use resend_client;
pub use resend_tools;

pub use astreus_core::{
    ParamKind, Plugin, PluginError, PluginResult, PluginState, Tool, ToolCall, ToolError,
    ToolParameter, ToolRegistry, ToolResult, ToolSchema,
};
pub use logging::{LogFormat, LoggingConfig, init_default_logging, init_logging};
pub use resend_client::{
    Attachment, GatewayError, GatewayResult, ResendClient, ResendConfig, SendEmailOptions,
    SendResult, SendTemplateEmailOptions, Tag,
};
pub use resend_tools::{ResendPlugin, SEND_EMAIL_TOOL, SEND_TEMPLATE_EMAIL_TOOL, ToolManifest};
