//! Tool registry for managing available tools

use crate::tools::base::Tool;
use crate::tools::types::ToolSchema;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry for managing available tools, keyed by tool name
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Option<Arc<dyn Tool>> {
        let name = tool.name().to_string();
        debug!(tool = %name, "Registering tool");
        self.tools.insert(name, tool)
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Get all tool names, sorted
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get all tools, sorted by name
    pub fn all_tools(&self) -> Vec<Arc<dyn Tool>> {
        let mut tools: Vec<Arc<dyn Tool>> = self.tools.values().cloned().collect();
        tools.sort_by(|a, b| a.name().cmp(b.name()));
        tools
    }

    /// Get the schemas of all tools, sorted by name
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.all_tools().iter().map(|tool| tool.schema()).collect()
    }

    /// Remove a tool
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Tool>> {
        debug!(tool = %name, "Removing tool");
        self.tools.remove(name)
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry holds no tools
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.tool_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::error::ToolError;
    use crate::tools::types::{ToolCall, ToolResult};
    use async_trait::async_trait;

    struct NamedTool {
        name: String,
        description: String,
    }

    impl NamedTool {
        fn arc(name: &str, description: &str) -> Arc<dyn Tool> {
            Arc::new(Self {
                name: name.to_string(),
                description: description.to_string(),
            })
        }
    }

    #[async_trait]
    impl Tool for NamedTool {
        fn name(&self) -> &str {
            &self.name
        }

        fn description(&self) -> &str {
            &self.description
        }

        fn schema(&self) -> ToolSchema {
            ToolSchema::new(self.name(), self.description(), vec![])
        }

        async fn execute(&self, call: &ToolCall) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::success(&call.id, self.name(), serde_json::Value::Null))
        }
    }

    #[test]
    fn test_register_and_get_tool() {
        let mut reg = ToolRegistry::new();
        assert!(reg.register(NamedTool::arc("b", "B")).is_none());
        assert!(reg.register(NamedTool::arc("a", "A")).is_none());

        assert!(reg.get("a").is_some());
        assert_eq!(reg.get("b").map(|t| t.description()), Some("B"));
        assert!(reg.get("c").is_none());
        assert_eq!(reg.tool_names(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(reg.schemas()[0].name, "a");
    }

    #[test]
    fn test_register_overwrites_existing() {
        let mut reg = ToolRegistry::new();
        reg.register(NamedTool::arc("a", "Original"));
        let previous = reg.register(NamedTool::arc("a", "Updated"));

        assert_eq!(previous.map(|t| t.description().to_string()).as_deref(), Some("Original"));
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get("a").map(|t| t.description()), Some("Updated"));
    }

    #[test]
    fn test_register_then_remove_restores_contents() {
        let mut reg = ToolRegistry::new();
        reg.register(NamedTool::arc("a", "A"));
        let before = reg.tool_names();

        reg.register(NamedTool::arc("extra", "Extra"));
        assert_eq!(reg.len(), 2);
        assert!(reg.remove("extra").is_some());

        assert_eq!(reg.tool_names(), before);
    }

    #[test]
    fn test_remove_nonexistent() {
        let mut reg = ToolRegistry::new();
        assert!(reg.remove("missing").is_none());
        assert!(reg.is_empty());
    }
}
