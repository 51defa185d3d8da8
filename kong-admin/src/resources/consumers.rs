//! Consumer entities: credentials-bearing API clients

use reqwest::Method;
use serde_json::{Map, Value, json};

use super::encode_segment;
use crate::api::client::{KongClient, RequestOptions};
use crate::api::error::{Error, Result};
use crate::api::response::ApiResponse;

/// Handle for `/consumers` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Consumers<'a> {
    client: &'a KongClient,
}

impl<'a> Consumers<'a> {
    pub(crate) fn new(client: &'a KongClient) -> Self {
        Self { client }
    }

    /// Create a consumer. The gateway requires at least one of `username`
    /// and `custom_id`; an empty pair is rejected here without a network
    /// call.
    pub fn create(&self, username: &str, custom_id: &str) -> Result<Option<ApiResponse>> {
        if username.is_empty() && custom_id.is_empty() {
            return Err(Error::Config(
                "either username or custom_id must be provided".to_string(),
            ));
        }
        let mut body = Map::new();
        if !username.is_empty() {
            body.insert("username".to_string(), json!(username));
        }
        if !custom_id.is_empty() {
            body.insert("custom_id".to_string(), json!(custom_id));
        }
        self.client.execute(
            Method::POST,
            "/consumers",
            RequestOptions::json(Value::Object(body)),
        )
    }

    /// Fetch one consumer by id or username.
    pub fn get(&self, id_or_username: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::GET,
            &format!("/consumers/{}", encode_segment(id_or_username)),
            RequestOptions::none(),
        )
    }

    /// Partially update fields of an existing consumer.
    pub fn update(&self, id_or_username: &str, fields: Value) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::PATCH,
            &format!("/consumers/{}", encode_segment(id_or_username)),
            RequestOptions::json(fields),
        )
    }

    /// Create or replace the consumer at this id or username.
    pub fn replace(&self, id_or_username: &str, fields: Value) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::PUT,
            &format!("/consumers/{}", encode_segment(id_or_username)),
            RequestOptions::json(fields),
        )
    }

    /// Delete a consumer.
    pub fn delete(&self, id_or_username: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::DELETE,
            &format!("/consumers/{}", encode_segment(id_or_username)),
            RequestOptions::none(),
        )
    }

    /// All consumers in the workspace, following pagination.
    pub fn list(&self) -> Result<Vec<ApiResponse>> {
        Ok(self
            .client
            .fetch_all("/consumers")?
            .into_iter()
            .map(ApiResponse::from_value)
            .collect())
    }

    /// ACL groups granted to a consumer, at
    /// `/consumers/{consumer}/acls`.
    pub fn acls(&self, id_or_username: &str) -> Result<Vec<ApiResponse>> {
        Ok(self
            .client
            .fetch_all(&format!("/consumers/{}/acls", encode_segment(id_or_username)))?
            .into_iter()
            .map(ApiResponse::from_value)
            .collect())
    }

    /// Grant an ACL group to a consumer.
    pub fn add_acl(&self, id_or_username: &str, group: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::POST,
            &format!("/consumers/{}/acls", encode_segment(id_or_username)),
            RequestOptions::json(json!({ "group": group })),
        )
    }

    /// Key-auth credentials of a consumer, at
    /// `/consumers/{consumer}/key-auth`.
    pub fn key_auth_credentials(&self, id_or_username: &str) -> Result<Vec<ApiResponse>> {
        Ok(self
            .client
            .fetch_all(&format!(
                "/consumers/{}/key-auth",
                encode_segment(id_or_username)
            ))?
            .into_iter()
            .map(ApiResponse::from_value)
            .collect())
    }

    /// Provision a key-auth credential for a consumer; `key` may be empty
    /// to let the gateway generate one.
    pub fn add_key_auth_credential(
        &self,
        id_or_username: &str,
        key: &str,
    ) -> Result<Option<ApiResponse>> {
        let body = if key.is_empty() {
            json!({})
        } else {
            json!({ "key": key })
        };
        self.client.execute(
            Method::POST,
            &format!("/consumers/{}/key-auth", encode_segment(id_or_username)),
            RequestOptions::json(body),
        )
    }
}
