//! Client library for the Kong Gateway Admin API
//!
//! Maps CRUD operations on the gateway's administrative resources —
//! services, routes, consumers, consumer groups, plugins, workspaces and
//! plugin-specific configuration — onto blocking HTTP requests against
//! the workspace-scoped Admin API, and wraps JSON responses in a uniform
//! field-accessible [`ApiResponse`].
//!
//! ```no_run
//! use kong_admin::{ClientConfig, KongClient};
//!
//! # fn main() -> kong_admin::Result<()> {
//! let client = KongClient::new(
//!     ClientConfig::builder()
//!         .admin_url("http://localhost:8001")
//!         .admin_token("s3cr3t")
//!         .build(),
//! )?;
//!
//! let service = client
//!     .services()
//!     .create("billing", "http://billing.internal:8080")?;
//! if let Some(service) = service {
//!     println!("created {}", service.get_str("id").unwrap_or("?"));
//! }
//!
//! for route in client.routes().list()? {
//!     println!("{route}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod resources;

pub use api::client::{ClientConfig, ClientConfigBuilder, KongClient, RequestOptions};
pub use api::error::{Error, Result};
pub use api::response::ApiResponse;
pub use resources::plugins::PluginScope;
