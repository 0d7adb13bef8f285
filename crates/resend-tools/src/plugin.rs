//! Resend plugin for Astreus agents
//!
//! The plugin exposes the two manifest tools as soon as it is constructed so the
//! host can inspect them, but no tool executes until [`ResendPlugin::initialize`]
//! has built the gateway client.

use crate::dispatch::{Dispatcher, ResendMethod, method_name};
use crate::manifest::{ToolManifest, manifests};
use crate::state::SharedState;
use crate::tool::ResendTool;
use astreus_core::{
    Plugin, PluginError, PluginResult, PluginState, Tool, ToolCall, ToolError, ToolRegistry,
    ToolSchema,
};
use async_trait::async_trait;
use resend_client::{GatewayResult, MailTransport, ResendClient, ResendConfig};
use serde_json::{Map, Value};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info, warn};

/// Plugin name reported to the host
pub const PLUGIN_NAME: &str = "resend";

/// Resend tool provider
pub struct ResendPlugin {
    config: ResendConfig,
    transport: Option<Arc<dyn MailTransport>>,
    state: SharedState,
    registry: ToolRegistry,
    tools: Vec<Arc<dyn Tool>>,
    call_counter: AtomicU64,
}

impl ResendPlugin {
    /// Construct the plugin; tools are described immediately, the client is not built
    pub fn new(config: ResendConfig) -> Self {
        let mut plugin = Self {
            config,
            transport: None,
            state: SharedState::new(),
            registry: ToolRegistry::new(),
            tools: Vec::new(),
            call_counter: AtomicU64::new(0),
        };
        plugin.build_tools();
        plugin
    }

    /// Construct the plugin from `RESEND_*` environment variables
    pub fn from_env() -> GatewayResult<Self> {
        Ok(Self::new(ResendConfig::from_env()?))
    }

    /// Use a custom transport instead of the Resend HTTP API
    pub fn with_transport(mut self, transport: Arc<dyn MailTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// The static manifest list
    pub fn manifests() -> &'static [ToolManifest] {
        manifests()
    }

    /// The configuration the plugin was constructed with
    pub fn config(&self) -> &ResendConfig {
        &self.config
    }

    /// True iff a non-empty credential is configured
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// The gateway client, once initialized
    pub fn client(&self) -> Option<Arc<ResendClient>> {
        self.state.client()
    }

    /// All tools currently exposed to the host, sorted by name
    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    /// Schemas of all exposed tools
    pub fn tool_schemas(&self) -> Vec<ToolSchema> {
        self.registry.schemas()
    }

    /// Register a tool, replacing any tool with the same name
    pub fn add_tool(&mut self, tool: Arc<dyn Tool>) {
        info!(tool = %tool.name(), "Adding tool to Resend plugin");
        self.registry.register(tool);
        self.sync_tools();
    }

    /// Remove a tool by name
    pub fn remove_tool(&mut self, name: &str) -> PluginResult<Arc<dyn Tool>> {
        let removed = self
            .registry
            .remove(name)
            .ok_or_else(|| PluginError::NotFound(name.to_string()))?;
        info!(tool = %name, "Removed tool from Resend plugin");
        self.sync_tools();
        Ok(removed)
    }

    /// (Re)build the manifest tools and resync the tool list
    fn build_tools(&mut self) {
        let dispatcher = Dispatcher::new(self.state.clone());
        for manifest in manifests() {
            let tool = ResendTool::new(manifest.clone(), dispatcher.clone());
            self.registry.register(Arc::new(tool));
        }
        self.sync_tools();
    }

    fn sync_tools(&mut self) {
        self.tools = self.registry.all_tools();
    }

    fn build_client(&self) -> PluginResult<ResendClient> {
        match &self.transport {
            Some(transport) => Ok(ResendClient::with_transport(
                self.config.clone(),
                Arc::clone(transport),
            )),
            None => ResendClient::new(self.config.clone()).map_err(|e| PluginError::InitFailed {
                name: PLUGIN_NAME.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Registry lookup; unprefixed method names resolve to their Resend tool
    fn find_tool(&self, tool_name: &str) -> Option<&Arc<dyn Tool>> {
        self.registry.get(tool_name).or_else(|| {
            ResendMethod::from_tool_name(tool_name)
                .ok()
                .and_then(|method| self.registry.get(method.tool_name()))
        })
    }

    fn next_call_id(&self) -> String {
        let n = self.call_counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-call-{}", PLUGIN_NAME, n)
    }
}

impl std::fmt::Debug for ResendPlugin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendPlugin")
            .field("state", &self.state.plugin_state())
            .field("config", &self.config)
            .field("tools", &self.registry.tool_names())
            .finish()
    }
}

#[async_trait]
impl Plugin for ResendPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &str {
        "Send transactional email through Resend"
    }

    fn state(&self) -> PluginState {
        self.state.plugin_state()
    }

    async fn initialize(&mut self) -> PluginResult<()> {
        self.state()
            .transition(PluginState::Initialized)
            .inspect_err(|e| error!(plugin = PLUGIN_NAME, error = %e, "Initialization rejected"))?;

        let client = self.build_client().inspect_err(|e| {
            error!(plugin = PLUGIN_NAME, error = %e, "Failed to build Resend client");
        })?;

        if !client.is_configured() {
            warn!(
                plugin = PLUGIN_NAME,
                "RESEND_API_KEY is not set; every send will fail with a configuration error"
            );
        }

        self.state.install(client);
        self.build_tools();

        info!(
            plugin = PLUGIN_NAME,
            tools = self.registry.len(),
            "Resend plugin initialized"
        );
        Ok(())
    }

    fn get_tools(&self) -> Vec<Arc<dyn Tool>> {
        self.tools.clone()
    }

    async fn execute(&self, tool_name: &str, params: Map<String, Value>) -> Result<Value, ToolError> {
        let tool = self.find_tool(tool_name).ok_or_else(|| {
            error!(tool = %tool_name, "Unknown Resend tool");
            ToolError::UnknownMethod(method_name(tool_name).to_string())
        })?;

        let call = ToolCall::new(self.next_call_id(), tool.name(), params);
        let result = tool.execute(&call).await?;
        Ok(result.output.unwrap_or(Value::Null))
    }
}
