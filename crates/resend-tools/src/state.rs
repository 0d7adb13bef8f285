//! Gateway lifecycle shared between the plugin and its tools

use astreus_core::PluginState;
use parking_lot::RwLock;
use resend_client::ResendClient;
use std::sync::Arc;

/// Whether the gateway client exists yet
pub(crate) enum GatewayState {
    Constructed,
    Initialized(Arc<ResendClient>),
}

/// Lifecycle handle cloned into every tool
#[derive(Clone)]
pub(crate) struct SharedState {
    inner: Arc<RwLock<GatewayState>>,
}

impl SharedState {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(GatewayState::Constructed)),
        }
    }

    pub(crate) fn plugin_state(&self) -> PluginState {
        match &*self.inner.read() {
            GatewayState::Constructed => PluginState::Constructed,
            GatewayState::Initialized(_) => PluginState::Initialized,
        }
    }

    /// The client, if initialized; the lock is released before returning
    pub(crate) fn client(&self) -> Option<Arc<ResendClient>> {
        match &*self.inner.read() {
            GatewayState::Constructed => None,
            GatewayState::Initialized(client) => Some(Arc::clone(client)),
        }
    }

    pub(crate) fn install(&self, client: ResendClient) {
        *self.inner.write() = GatewayState::Initialized(Arc::new(client));
    }
}
