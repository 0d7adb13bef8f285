//! Plugin system for tool providers
//!
//! A plugin bundles a set of tools behind one provider. The host constructs the
//! plugin, inspects its tools, initializes it, then executes tools by name.

mod lifecycle;

pub use lifecycle::PluginState;

use crate::tools::base::Tool;
use crate::tools::error::ToolError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Plugin result type
pub type PluginResult<T> = Result<T, PluginError>;

/// Plugin error types
#[derive(Debug, Clone, thiserror::Error)]
pub enum PluginError {
    /// Plugin initialization failed
    #[error("Plugin '{name}' initialization failed: {reason}")]
    InitFailed { name: String, reason: String },

    /// Lifecycle transition not allowed from the current state
    #[error("Invalid plugin state transition: {from} -> {to}")]
    InvalidTransition { from: PluginState, to: PluginState },

    /// Tool not found
    #[error("Tool not found: {0}")]
    NotFound(String),
}

/// Main plugin trait
#[async_trait]
pub trait Plugin: Send + Sync {
    /// Get plugin name
    fn name(&self) -> &str;

    /// Get plugin version
    fn version(&self) -> &str;

    /// Get plugin description
    fn description(&self) -> &str {
        ""
    }

    /// Current lifecycle state
    fn state(&self) -> PluginState;

    /// Initialize the plugin
    async fn initialize(&mut self) -> PluginResult<()>;

    /// Get tools provided by this plugin
    fn get_tools(&self) -> Vec<Arc<dyn Tool>>;

    /// Execute a tool by name with loosely-typed parameters
    async fn execute(&self, tool_name: &str, params: Map<String, Value>) -> Result<Value, ToolError>;
}
