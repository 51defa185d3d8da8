//! Consumer group entities and their membership and override endpoints

use reqwest::Method;
use serde_json::{Value, json};

use super::encode_segment;
use crate::api::client::{KongClient, RequestOptions};
use crate::api::error::Result;
use crate::api::response::ApiResponse;

/// Handle for `/consumer_groups` endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ConsumerGroups<'a> {
    client: &'a KongClient,
}

impl<'a> ConsumerGroups<'a> {
    pub(crate) fn new(client: &'a KongClient) -> Self {
        Self { client }
    }

    /// Create a consumer group named `name`.
    pub fn create(&self, name: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::POST,
            "/consumer_groups",
            RequestOptions::json(json!({ "name": name })),
        )
    }

    /// Fetch one consumer group by id or name.
    pub fn get(&self, id_or_name: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::GET,
            &format!("/consumer_groups/{}", encode_segment(id_or_name)),
            RequestOptions::none(),
        )
    }

    /// Create or replace the consumer group at this id or name.
    pub fn replace(&self, id_or_name: &str, fields: Value) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::PUT,
            &format!("/consumer_groups/{}", encode_segment(id_or_name)),
            RequestOptions::json(fields),
        )
    }

    /// Delete a consumer group.
    pub fn delete(&self, id_or_name: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::DELETE,
            &format!("/consumer_groups/{}", encode_segment(id_or_name)),
            RequestOptions::none(),
        )
    }

    /// All consumer groups in the workspace, following pagination.
    pub fn list(&self) -> Result<Vec<ApiResponse>> {
        Ok(self
            .client
            .fetch_all("/consumer_groups")?
            .into_iter()
            .map(ApiResponse::from_value)
            .collect())
    }

    /// The group envelope with its member consumers, from
    /// `/consumer_groups/{group}/consumers`.
    pub fn consumers(&self, group: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::GET,
            &format!("/consumer_groups/{}/consumers", encode_segment(group)),
            RequestOptions::none(),
        )
    }

    /// Add a consumer (by id or username) to a group.
    pub fn add_consumer(&self, group: &str, consumer: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::POST,
            &format!("/consumer_groups/{}/consumers", encode_segment(group)),
            RequestOptions::json(json!({ "consumer": consumer })),
        )
    }

    /// Remove one consumer from a group.
    pub fn remove_consumer(&self, group: &str, consumer: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::DELETE,
            &format!(
                "/consumer_groups/{}/consumers/{}",
                encode_segment(group),
                encode_segment(consumer)
            ),
            RequestOptions::none(),
        )
    }

    /// Remove every consumer from a group.
    pub fn remove_consumers(&self, group: &str) -> Result<Option<ApiResponse>> {
        self.client.execute(
            Method::DELETE,
            &format!("/consumer_groups/{}/consumers", encode_segment(group)),
            RequestOptions::none(),
        )
    }

    /// Install a `rate-limiting-advanced` override for a group: `limits`
    /// and `window_sizes` are parallel arrays, windows slide, and no
    /// retry-after jitter is added.
    pub fn configure_rate_limit(
        &self,
        group: &str,
        limits: &[u64],
        window_sizes: &[u64],
    ) -> Result<Option<ApiResponse>> {
        let body = json!({
            "config": {
                "limit": limits,
                "window_size": window_sizes,
                "window_type": "sliding",
                "retry_after_jitter_max": 0,
            }
        });
        self.client.execute(
            Method::PUT,
            &format!(
                "/consumer_groups/{}/overrides/plugins/rate-limiting-advanced",
                encode_segment(group)
            ),
            RequestOptions::json(body),
        )
    }
}
