//! Manifest-backed tools

use crate::dispatch::Dispatcher;
use crate::manifest::ToolManifest;
use astreus_core::{Tool, ToolCall, ToolError, ToolParameter, ToolResult, ToolSchema};
use async_trait::async_trait;

/// A tool described by a [`ToolManifest`] and executed through the gateway
#[derive(Clone)]
pub struct ResendTool {
    manifest: ToolManifest,
    parameters: Vec<ToolParameter>,
    dispatcher: Dispatcher,
}

impl ResendTool {
    pub(crate) fn new(manifest: ToolManifest, dispatcher: Dispatcher) -> Self {
        let parameters = manifest.parameters.to_parameters();
        Self {
            manifest,
            parameters,
            dispatcher,
        }
    }

    /// The manifest this tool was built from
    pub fn manifest(&self) -> &ToolManifest {
        &self.manifest
    }

    /// Parameter descriptors derived from the manifest
    pub fn parameters(&self) -> &[ToolParameter] {
        &self.parameters
    }
}

impl std::fmt::Debug for ResendTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResendTool")
            .field("name", &self.manifest.name)
            .field("parameters", &self.parameters.len())
            .finish()
    }
}

#[async_trait]
impl Tool for ResendTool {
    fn name(&self) -> &str {
        &self.manifest.name
    }

    fn description(&self) -> &str {
        &self.manifest.description
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(self.name(), self.description(), self.parameters.clone())
    }

    async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
        let output = self.dispatcher.dispatch(self.name(), &call.arguments).await?;
        Ok(ToolResult::success(&call.id, self.name(), output))
    }
}
