//! Tool system for Astreus providers

pub mod base;
pub mod error;
pub mod registry;
pub mod types;

pub use base::Tool;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use types::{ParamKind, ToolCall, ToolParameter, ToolResult, ToolSchema};
