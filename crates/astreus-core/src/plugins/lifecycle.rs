//! Plugin lifecycle state

use super::{PluginError, PluginResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Plugin lifecycle state
///
/// `Constructed -> Initialized` is the only transition. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PluginState {
    /// Tools are described but the provider client does not exist yet
    Constructed,

    /// The provider client exists and tools may execute
    Initialized,
}

impl PluginState {
    /// Validate a transition and return the new state
    pub fn transition(self, to: PluginState) -> PluginResult<PluginState> {
        match (self, to) {
            (PluginState::Constructed, PluginState::Initialized) => Ok(to),
            (from, to) => Err(PluginError::InvalidTransition { from, to }),
        }
    }
}

impl fmt::Display for PluginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginState::Constructed => f.write_str("constructed"),
            PluginState::Initialized => f.write_str("initialized"),
        }
    }
}
