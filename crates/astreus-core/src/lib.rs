//! Core contracts for Astreus tool providers
//!
//! An Astreus agent talks to tool providers through two abstractions:
//!
//! - [`tools`] - named, schema-described callable operations ([`Tool`]) and the
//!   [`ToolRegistry`] that holds them
//! - [`plugins`] - the [`Plugin`] trait a provider implements to expose its tools,
//!   together with its lifecycle state
//!
//! Provider crates depend on this crate only; the host depends on it to drive them.

pub mod plugins;
pub mod tools;

pub use plugins::{Plugin, PluginError, PluginResult, PluginState};
pub use tools::{
    ParamKind, Tool, ToolCall, ToolError, ToolParameter, ToolRegistry, ToolResult, ToolSchema,
};
