//! Plugin entities, global or attached to an owning entity

use reqwest::Method;
use serde_json::{Value, json};

use super::encode_segment;
use crate::api::client::{KongClient, RequestOptions};
use crate::api::error::Result;
use crate::api::response::ApiResponse;

/// Where a plugin is attached.
///
/// The scope picks the endpoint family: `/plugins` for [`Global`], nested
/// paths like `/services/{id}/plugins` otherwise.
///
/// [`Global`]: PluginScope::Global
#[derive(Debug, Clone, Copy)]
pub enum PluginScope<'a> {
    /// Applies to every request passing through the workspace.
    Global,
    /// Attached to one service, by id or name.
    Service(&'a str),
    /// Attached to one route, by id or name.
    Route(&'a str),
    /// Attached to one consumer, by id or username.
    Consumer(&'a str),
}

impl PluginScope<'_> {
    /// Collection path for this scope.
    pub fn base_path(&self) -> String {
        match self {
            Self::Global => "/plugins".to_string(),
            Self::Service(owner) => format!("/services/{}/plugins", encode_segment(owner)),
            Self::Route(owner) => format!("/routes/{}/plugins", encode_segment(owner)),
            Self::Consumer(owner) => format!("/consumers/{}/plugins", encode_segment(owner)),
        }
    }

    fn entity_path(&self, plugin_id: &str) -> String {
        format!("{}/{}", self.base_path(), encode_segment(plugin_id))
    }
}

/// Handle for plugin endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Plugins<'a> {
    client: &'a KongClient,
}

impl<'a> Plugins<'a> {
    pub(crate) fn new(client: &'a KongClient) -> Self {
        Self { client }
    }

    /// Enable a plugin named `name` in `scope`, with an optional `config`
    /// object.
    pub fn create(
        &self,
        scope: PluginScope<'_>,
        name: &str,
        config: Option<Value>,
    ) -> Result<Option<ApiResponse>> {
        let mut body = json!({ "name": name });
        if let (Value::Object(entries), Some(config)) = (&mut body, config) {
            entries.insert("config".to_string(), config);
        }
        self.client
            .execute(Method::POST, &scope.base_path(), RequestOptions::json(body))
    }

    /// Fetch one plugin by id.
    pub fn get(&self, scope: PluginScope<'_>, plugin_id: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::GET,
            &scope.entity_path(plugin_id),
            RequestOptions::none(),
        )
    }

    /// Partially update fields of an existing plugin.
    pub fn update(
        &self,
        scope: PluginScope<'_>,
        plugin_id: &str,
        fields: Value,
    ) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::PATCH,
            &scope.entity_path(plugin_id),
            RequestOptions::json(fields),
        )
    }

    /// Delete a plugin.
    pub fn delete(&self, scope: PluginScope<'_>, plugin_id: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::DELETE,
            &scope.entity_path(plugin_id),
            RequestOptions::none(),
        )
    }

    /// All plugins in `scope`, following pagination.
    pub fn list(&self, scope: PluginScope<'_>) -> Result<Vec<ApiResponse>> {
        Ok(self
            .client
            .fetch_all(&scope.base_path())?
            .into_iter()
            .map(ApiResponse::from_value)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_paths() {
        assert_eq!(PluginScope::Global.base_path(), "/plugins");
        assert_eq!(
            PluginScope::Service("billing").base_path(),
            "/services/billing/plugins"
        );
        assert_eq!(
            PluginScope::Route("r1").entity_path("789"),
            "/routes/r1/plugins/789"
        );
        assert_eq!(
            PluginScope::Consumer("user with space").base_path(),
            "/consumers/user%20with%20space/plugins"
        );
    }
}
