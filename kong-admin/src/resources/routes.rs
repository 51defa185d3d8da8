//! Route entities: match rules binding requests to services

use reqwest::Method;
use serde_json::{Value, json};

use super::encode_segment;
use crate::api::client::{KongClient, RequestOptions};
use crate::api::error::Result;
use crate::api::response::ApiResponse;

/// Handle for `/routes` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Routes<'a> {
    client: &'a KongClient,
}

impl<'a> Routes<'a> {
    pub(crate) fn new(client: &'a KongClient) -> Self {
        Self { client }
    }

    /// Create a route named `name`. `fields` carries the match rules
    /// (protocols, paths, hosts, a service binding, ...) and is merged
    /// with the name.
    pub fn create(&self, name: &str, fields: Value) -> Result<Option<ApiResponse>> {
        let mut body = fields;
        if let Value::Object(entries) = &mut body {
            entries.insert("name".to_string(), json!(name));
        }
        self.client
            .execute(Method::POST, "/routes", RequestOptions::json(body))
    }

    /// Fetch one route by id or name.
    pub fn get(&self, id_or_name: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::GET,
            &format!("/routes/{}", encode_segment(id_or_name)),
            RequestOptions::none(),
        )
    }

    /// Partially update fields of an existing route.
    pub fn update(&self, id_or_name: &str, fields: Value) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::PATCH,
            &format!("/routes/{}", encode_segment(id_or_name)),
            RequestOptions::json(fields),
        )
    }

    /// Create or replace the route at this id or name.
    pub fn replace(&self, id_or_name: &str, fields: Value) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::PUT,
            &format!("/routes/{}", encode_segment(id_or_name)),
            RequestOptions::json(fields),
        )
    }

    /// Delete a route.
    pub fn delete(&self, id_or_name: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::DELETE,
            &format!("/routes/{}", encode_segment(id_or_name)),
            RequestOptions::none(),
        )
    }

    /// All routes in the workspace, following pagination.
    pub fn list(&self) -> Result<Vec<ApiResponse>> {
        Ok(self
            .client
            .fetch_all("/routes")?
            .into_iter()
            .map(ApiResponse::from_value)
            .collect())
    }
}
