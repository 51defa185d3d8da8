//! Core request/response machinery for the Admin API
//!
//! Everything resource modules need flows through two entry points:
//! [`KongClient::execute`] for a single request and
//! [`KongClient::fetch_all`] for paginated collection reads. The core is
//! endpoint-agnostic; resource paths live in [`crate::resources`].

pub mod auth;
pub mod client;
pub mod constants;
pub mod error;
pub mod response;

pub use auth::AuthStrategy;
pub use client::{ClientConfig, ClientConfigBuilder, KongClient, RequestOptions};
pub use error::{Error, Result};
pub use response::ApiResponse;
