//! The `key-auth` plugin: API key authentication

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::KongClient;
use crate::api::error::Result;
use crate::api::response::ApiResponse;
use crate::resources::plugins::{PluginScope, Plugins};

/// `config` object for the `key-auth` plugin.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KeyAuthConfig {
    /// Header/parameter names inspected for the key.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_names: Vec<String>,
    /// Strip the credential from the request before proxying upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_credentials: Option<bool>,
    /// Also accept the key in the request body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_in_body: Option<bool>,
}

impl KeyAuthConfig {
    /// Config with custom key names only.
    pub fn key_names(names: Vec<String>) -> Self {
        Self {
            key_names: names,
            ..Self::default()
        }
    }

    fn into_value(self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Handle for `key-auth` plugin instances.
#[derive(Debug, Clone, Copy)]
pub struct KeyAuthPlugin<'a> {
    plugins: Plugins<'a>,
}

impl<'a> KeyAuthPlugin<'a> {
    /// Plugin name on the gateway.
    pub const NAME: &'static str = "key-auth";

    pub(crate) fn new(client: &'a KongClient) -> Self {
        Self {
            plugins: Plugins::new(client),
        }
    }

    /// Enable the plugin in `scope`.
    pub fn create(
        &self,
        scope: PluginScope<'_>,
        config: KeyAuthConfig,
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_config_serialization() {
        let value = KeyAuthConfig::key_names(vec!["customKey".to_string()])
            .into_value()
            .unwrap();
        assert_eq!(value, json!({ "key_names": ["customKey"] }));

        let empty = KeyAuthConfig::default().into_value().unwrap();
        assert_eq!(empty, json!({}));
    }
}
