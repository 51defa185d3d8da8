//! The `rate-limiting-advanced` plugin: windowed rate limits

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::KongClient;
use crate::api::error::Result;
use crate::api::response::ApiResponse;
use crate::resources::plugins::{PluginScope, Plugins};

/// `config` object for the `rate-limiting-advanced` plugin. `limit` and
/// `window_size` are parallel arrays: one limit per window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateLimitingAdvancedConfig {
    /// Maximum requests per corresponding window.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub limit: Vec<u64>,
    /// Window lengths in seconds.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub window_size: Vec<u64>,
    /// `sliding` or `fixed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_type: Option<String>,
    /// Counter sync interval in seconds; -1 disables syncing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sync_rate: Option<f64>,
    /// Counter namespace shared between plugin instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Upper bound on the jitter added to Retry-After.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after_jitter_max: Option<u64>,
}

impl RateLimitingAdvancedConfig {
    /// Config from parallel limit/window arrays.
    pub fn windows(limit: Vec<u64>, window_size: Vec<u64>) -> Self {
        Self {
            limit,
            window_size,
            ..Self::default()
        }
    }

    fn into_value(self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Handle for `rate-limiting-advanced` plugin instances.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitingAdvancedPlugin<'a> {
    plugins: Plugins<'a>,
}

impl<'a> RateLimitingAdvancedPlugin<'a> {
    /// Plugin name on the gateway.
    pub const NAME: &'static str = "rate-limiting-advanced";

    pub(crate) fn new(client: &'a KongClient) -> Self {
        Self {
            plugins: Plugins::new(client),
        }
    }

    /// Enable the plugin in `scope`.
    pub fn create(
        &self,
        scope: PluginScope<'_>,
        config: RateLimitingAdvancedConfig,
    ) -> Result<Option<ApiResponse>> {
        self.plugins
            .create(scope, Self::NAME, Some(config.into_value()?))
    }

    /// Fetch one plugin instance by id.
    pub fn retrieve(&self, plugin_id: &str) -> Result<Option<ApiResponse>> {
        self.plugins.get(PluginScope::Global, plugin_id)
    }

    /// Partially update a plugin instance.
    pub fn update(&self, plugin_id: &str, fields: Value) -> Result<Option<ApiResponse>> {
        self.plugins.update(PluginScope::Global, plugin_id, fields)
    }

    /// Delete a plugin instance.
    pub fn delete(&self, plugin_id: &str) -> Result<Option<ApiResponse>> {
        self.plugins.delete(PluginScope::Global, plugin_id)
    }

    /// Plugins attached to a service.
    pub fn list_for_service(&self, service: &str) -> Result<Vec<ApiResponse>> {
        self.plugins.list(PluginScope::Service(service))
    }

    /// Plugins attached to a route.
    pub fn list_for_route(&self, route: &str) -> Result<Vec<ApiResponse>> {
        self.plugins.list(PluginScope::Route(route))
    }
}
