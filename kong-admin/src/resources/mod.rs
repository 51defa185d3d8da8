//! Thin endpoint mappings over [`KongClient`]
//!
//! Each resource holds a borrowed client and translates typed parameters
//! into fixed endpoint templates; all transport concerns stay in
//! [`crate::api`]. Single-entity calls return
//! `Result<Option<ApiResponse>>` (the executor collapses "no content" to
//! `None`), list calls return `Result<Vec<ApiResponse>>` and follow
//! pagination.

pub mod consumer_groups;
pub mod consumers;
pub mod plugin_types;
pub mod plugins;
pub mod routes;
pub mod services;
pub mod workspaces;

pub use consumer_groups::ConsumerGroups;
pub use consumers::Consumers;
pub use plugin_types::acl::{AclConfig, AclPlugin};
pub use plugin_types::key_auth::{KeyAuthConfig, KeyAuthPlugin};
pub use plugin_types::rate_limiting_advanced::{
    RateLimitingAdvancedConfig, RateLimitingAdvancedPlugin,
};
pub use plugins::{PluginScope, Plugins};
pub use routes::Routes;
pub use services::Services;
pub use workspaces::Workspaces;

use std::borrow::Cow;

use crate::api::client::KongClient;

/// Percent-encode an id-or-name path segment.
pub(crate) fn encode_segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

impl KongClient {
    /// Handle for `/services` endpoints.
    pub fn services(&self) -> Services<'_> {
        Services::new(self)
    }

    /// Handle for `/routes` endpoints.
    pub fn routes(&self) -> Routes<'_> {
        Routes::new(self)
    }

    /// Handle for `/consumers` endpoints.
    pub fn consumers(&self) -> Consumers<'_> {
        Consumers::new(self)
    }

    /// Handle for `/consumer_groups` endpoints.
    pub fn consumer_groups(&self) -> ConsumerGroups<'_> {
        ConsumerGroups::new(self)
    }

    /// Handle for plugin endpoints, global or scoped to an owning entity.
    pub fn plugins(&self) -> Plugins<'_> {
        Plugins::new(self)
    }

    /// Handle for `/workspaces` endpoints.
    pub fn workspaces(&self) -> Workspaces<'_> {
        Workspaces::new(self)
    }

    /// Handle for the `acl` plugin type.
    pub fn acl(&self) -> AclPlugin<'_> {
        AclPlugin::new(self)
    }

    /// Handle for the `key-auth` plugin type.
    pub fn key_auth(&self) -> KeyAuthPlugin<'_> {
        KeyAuthPlugin::new(self)
    }

    /// Handle for the `rate-limiting-advanced` plugin type.
    pub fn rate_limiting_advanced(&self) -> RateLimitingAdvancedPlugin<'_> {
        RateLimitingAdvancedPlugin::new(self)
    }
}
