//! Service entities: upstreams the gateway proxies to

use reqwest::Method;
use serde_json::{Value, json};

use super::encode_segment;
use crate::api::client::{KongClient, RequestOptions};
use crate::api::error::Result;
use crate::api::response::ApiResponse;

/// Handle for `/services` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Services<'a> {
    client: &'a KongClient,
}

impl<'a> Services<'a> {
    pub(crate) fn new(client: &'a KongClient) -> Self {
        Self { client }
    }

    /// Register a service named `name` proxying to `url`.
    pub fn create(&self, name: &str, url: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::POST,
            "/services",
            RequestOptions::json(json!({ "name": name, "url": url })),
        )
    }

    /// Fetch one service by id or name.
    pub fn get(&self, id_or_name: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::GET,
            &format!("/services/{}", encode_segment(id_or_name)),
            RequestOptions::none(),
        )
    }

    /// Partially update fields of an existing service.
    pub fn update(&self, id_or_name: &str, fields: Value) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::PATCH,
            &format!("/services/{}", encode_segment(id_or_name)),
            RequestOptions::json(fields),
        )
    }

    /// Create or replace the service at this id or name.
    pub fn replace(&self, id_or_name: &str, fields: Value) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::PUT,
            &format!("/services/{}", encode_segment(id_or_name)),
            RequestOptions::json(fields),
        )
    }

    /// Delete a service.
    pub fn delete(&self, id_or_name: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::DELETE,
            &format!("/services/{}", encode_segment(id_or_name)),
            RequestOptions::none(),
        )
    }

    /// All services in the workspace, following pagination.
    pub fn list(&self) -> Result<Vec<ApiResponse>> {
        Ok(self
            .client
            .fetch_all("/services")?
            .into_iter()
            .map(ApiResponse::from_value)
            .collect())
    }
}
