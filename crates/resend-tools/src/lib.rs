//! Astreus tool adapter for the Resend email gateway
//!
//! Exposes `resend_send_email` and `resend_send_template_email` as Astreus tools.
//! Tools are derived from static [`manifest`]s, invocations are routed by
//! [`dispatch`] to the [`resend_client::ResendClient`], and [`ResendPlugin`] ties
//! both to the host's plugin lifecycle.

pub mod dispatch;
pub mod manifest;
pub mod plugin;
mod state;
pub mod tool;

pub use dispatch::{Dispatcher, ResendMethod, method_name, tool_error};
pub use manifest::{
    ManifestParameters, Properties, PropertySpec, SEND_EMAIL_TOOL, SEND_TEMPLATE_EMAIL_TOOL,
    TOOL_PREFIX, ToolManifest, manifests,
};
pub use plugin::{PLUGIN_NAME, ResendPlugin};
pub use tool::ResendTool;
