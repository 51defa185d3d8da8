//! The `acl` plugin: group-based access control

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::client::KongClient;
use crate::api::error::Result;
use crate::api::response::ApiResponse;
use crate::resources::plugins::{PluginScope, Plugins};

/// `config` object for the `acl` plugin. Empty lists are omitted from the
/// payload so the gateway applies its own defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AclConfig {
    /// Groups allowed through.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allow: Vec<String>,
    /// Groups rejected outright.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub deny: Vec<String>,
    /// Strip the consumer-groups header before proxying upstream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_groups_header: Option<bool>,
}

impl AclConfig {
    /// Allow-list-only config.
    pub fn allow(groups: Vec<String>) -> Self {
        Self {
            allow: groups,
            ..Self::default()
        }
    }

    fn into_value(self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Handle for `acl` plugin instances.
#[derive(Debug, Clone, Copy)]
pub struct AclPlugin<'a> {
    plugins: Plugins<'a>,
}

impl<'a> AclPlugin<'a> {
    /// Plugin name on the gateway.
    pub const NAME: &'static str = "acl";

    pub(crate) fn new(client: &'a KongClient) -> Self {
        Self {
            plugins: Plugins::new(client),
        }
    }

    /// Enable the plugin in `scope` with the given group lists.
    pub fn create(&self, scope: PluginScope<'_>, config: AclConfig) -> Result<Option<ApiResponse>> {
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
    fn test_config_omits_empty_lists() {
        let value = AclConfig::allow(vec!["admin".to_string()])
            .into_value()
            .unwrap();
        assert_eq!(value, json!({ "allow": ["admin"] }));
    }

    #[test]
    fn test_full_config() {
        let config = AclConfig {
            allow: vec!["admin".to_string()],
            deny: vec!["guest".to_string()],
            hide_groups_header: Some(true),
        };
        assert_eq!(
            config.into_value().unwrap(),
            json!({ "allow": ["admin"], "deny": ["guest"], "hide_groups_header": true })
        );
    }
}
