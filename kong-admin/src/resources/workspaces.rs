//! Workspace entities: named partitions of administrative resources

use reqwest::Method;
use serde_json::{Value, json};

use super::encode_segment;
use crate::api::client::{KongClient, RequestOptions};
use crate::api::error::Result;
use crate::api::response::ApiResponse;

/// Handle for `/workspaces` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Workspaces<'a> {
    client: &'a KongClient,
}

impl<'a> Workspaces<'a> {
    pub(crate) fn new(client: &'a KongClient) -> Self {
        Self { client }
    }

    /// Create a workspace named `name`.
    pub fn create(&self, name: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::POST,
            "/workspaces",
            RequestOptions::json(json!({ "name": name })),
        )
    }

    /// Fetch one workspace by id or name.
    pub fn get(&self, id_or_name: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::GET,
            &format!("/workspaces/{}", encode_segment(id_or_name)),
            RequestOptions::none(),
        )
    }

    /// Partially update fields of an existing workspace (e.g. `comment`).
    pub fn update(&self, id_or_name: &str, fields: Value) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::PATCH,
            &format!("/workspaces/{}", encode_segment(id_or_name)),
            RequestOptions::json(fields),
        )
    }

    /// Create or rename the workspace at this id or name.
    pub fn replace(&self, id_or_name: &str, name: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::PUT,
            &format!("/workspaces/{}", encode_segment(id_or_name)),
            RequestOptions::json(json!({ "name": name })),
        )
    }

    /// Delete a workspace.
    pub fn delete(&self, id_or_name: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::DELETE,
            &format!("/workspaces/{}", encode_segment(id_or_name)),
            RequestOptions::none(),
        )
    }

    /// All workspaces visible from this client, following pagination.
    pub fn list(&self) -> Result<Vec<ApiResponse>> {
        Ok(self
            .client
            .fetch_all("/workspaces")?
            .into_iter()
            .map(ApiResponse::from_value)
            .collect())
    }
}
